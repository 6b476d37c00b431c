use super::{ChatCompletionRequest, ChatCompletionResponse, convert};
use async_trait::async_trait;
use derive_getters::Getters;
use taleweaver_core::{GenerateRequest, GenerateResponse};
use taleweaver_error::{BackendError, BackendErrorKind, ConfigError, TaleweaverResult};
use taleweaver_interface::TextGenerator;
use tracing::instrument;

/// Environment variable holding the chat completion credential.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Connection settings for an OpenAI-compatible chat completion service.
#[derive(Clone, PartialEq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct OpenAiConfig {
    /// Base URL up to and including the API version (e.g. "https://api.openai.com/v1")
    #[builder(default = "\"https://api.openai.com/v1\".to_string()")]
    base_url: String,
    /// Model identifier used when a request does not override it
    #[builder(default = "\"gpt-4o\".to_string()")]
    model: String,
    /// Bearer credential
    api_key: String,
    /// Default sampling temperature
    #[builder(default)]
    temperature: Option<f32>,
    /// Default completion length cap
    #[builder(default)]
    max_tokens: Option<u32>,
}

impl OpenAiConfig {
    /// Creates a new builder for `OpenAiConfig`.
    pub fn builder() -> OpenAiConfigBuilder {
        OpenAiConfigBuilder::default()
    }

    /// Default settings with the credential read from `OPENAI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the variable is unset; the text
    /// path never runs without a credential.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var(OPENAI_API_KEY_VAR)
            .map_err(|e| ConfigError::new(format!("{} not set: {}", OPENAI_API_KEY_VAR, e)))?;

        Self::builder()
            .api_key(api_key)
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid OpenAI configuration: {}", e)))
    }
}

impl std::fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

/// Client for OpenAI-compatible chat completion services.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    config: OpenAiConfig,
    client: reqwest::Client,
}

impl OpenAiClient {
    /// Create a new client
    #[instrument(skip(config), fields(base_url = %config.base_url, model = %config.model))]
    pub fn new(config: OpenAiConfig) -> Self {
        tracing::debug!("Creating OpenAI client");
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Client with default settings and the credential from `OPENAI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the credential is missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(OpenAiConfig::from_env()?))
    }

    /// Get the client configuration
    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    /// Send a chat completion request
    #[instrument(skip(self, request), fields(model = %request.model(), messages = request.messages().len()))]
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, BackendError> {
        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );
        tracing::debug!("Sending chat completion request to {}", url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Request failed: {}", e);
                BackendError::new(BackendErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            BackendError::new(BackendErrorKind::Http(format!(
                "Failed to read response body: {}",
                e
            )))
        })?;

        let result = parse_response(status, &body)?;
        tracing::debug!("Chat completion successful");
        Ok(result)
    }
}

/// Map a raw status and body onto a chat completion response.
///
/// Any non-2xx status is an `Api` error carrying the body text; a 2xx body
/// that does not parse is a `Deserialization` error.
fn parse_response(status: u16, body: &[u8]) -> Result<ChatCompletionResponse, BackendError> {
    if !(200..300).contains(&status) {
        let message = String::from_utf8_lossy(body).into_owned();
        tracing::error!(status, "Backend returned error");
        return Err(BackendError::new(BackendErrorKind::Api { status, message }));
    }

    serde_json::from_slice(body).map_err(|e| {
        tracing::error!("Failed to parse response: {}", e);
        BackendError::new(BackendErrorKind::Deserialization(format!(
            "Failed to parse response: {}",
            e
        )))
    })
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    #[instrument(skip(self, req), fields(provider = "openai", model = %self.config.model))]
    async fn generate(&self, req: &GenerateRequest) -> TaleweaverResult<GenerateResponse> {
        let chat_request = convert::to_chat_request(
            req,
            &self.config.model,
            self.config.temperature,
            self.config.max_tokens,
        )?;

        let response = self.chat_completion(&chat_request).await?;

        Ok(convert::from_chat_response(response)?)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
