use async_trait::async_trait;
use derive_getters::Getters;
use taleweaver_error::{ImageError, ImageErrorKind};
use taleweaver_interface::{ImageGenerationRequest, ImageTransport, TransportResponse};
use tracing::instrument;

/// Environment variable overriding the image service host.
pub const API_HOST_VAR: &str = "API_HOST";

/// Endpoint settings for a Stability-style text-to-image service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct StabilityConfig {
    /// Scheme and host of the service
    #[builder(default = "\"https://api.stability.ai\".to_string()")]
    api_host: String,
    /// Engine used for generation
    #[builder(default = "\"stable-diffusion-xl-1024-v1-0\".to_string()")]
    engine_id: String,
}

impl StabilityConfig {
    /// Creates a new builder for `StabilityConfig`.
    pub fn builder() -> StabilityConfigBuilder {
        StabilityConfigBuilder::default()
    }

    /// Full text-to-image endpoint URL.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1/generation/{}/text-to-image",
            self.api_host.trim_end_matches('/'),
            self.engine_id
        )
    }
}

impl Default for StabilityConfig {
    fn default() -> Self {
        Self {
            api_host: "https://api.stability.ai".to_string(),
            engine_id: "stable-diffusion-xl-1024-v1-0".to_string(),
        }
    }
}

/// reqwest-backed transport for the text-to-image endpoint.
#[derive(Debug, Clone)]
pub struct StabilityTransport {
    config: StabilityConfig,
    client: reqwest::Client,
}

impl StabilityTransport {
    /// Create a transport for the given endpoint settings.
    #[instrument(skip(config), fields(endpoint = %config.endpoint()))]
    pub fn new(config: StabilityConfig) -> Self {
        tracing::debug!("Creating Stability transport");
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Default endpoint, with `API_HOST` overriding the host when set.
    pub fn from_env() -> Self {
        let mut config = StabilityConfig::default();
        if let Ok(host) = std::env::var(API_HOST_VAR) {
            config.api_host = host;
        }
        Self::new(config)
    }

    /// Get the endpoint settings
    pub fn config(&self) -> &StabilityConfig {
        &self.config
    }
}

#[async_trait]
impl ImageTransport for StabilityTransport {
    #[instrument(skip(self, request, api_key), fields(engine = %self.config.engine_id))]
    async fn send(
        &self,
        request: &ImageGenerationRequest,
        api_key: &str,
    ) -> Result<TransportResponse, ImageError> {
        let url = self.config.endpoint();
        tracing::debug!("Sending text-to-image request to {}", url);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Accept", "image/png")
            .header("Authorization", format!("Bearer {}", api_key))
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Request failed: {}", e);
                ImageError::new(ImageErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            ImageError::new(ImageErrorKind::Http(format!(
                "Failed to read response body: {}",
                e
            )))
        })?;

        tracing::debug!(status, bytes = body.len(), "Received image service response");
        Ok(TransportResponse::new(status, body.to_vec()))
    }
}
