use taleweaver_core::{ImageOutcome, RenderedImage};
use taleweaver_error::{ConfigError, ImageError, ImageErrorKind, TaleweaverResult};
use taleweaver_interface::{ImageGenerationRequest, ImageTransport};
use tracing::instrument;

/// Environment variable holding the image service credential.
pub const STABILITY_API_KEY_VAR: &str = "STABILITY_API_KEY";

/// Guidance scale sent with every request.
pub const CFG_SCALE: u32 = 7;
/// Output height in pixels.
pub const HEIGHT: u32 = 1024;
/// Output width in pixels.
pub const WIDTH: u32 = 1024;
/// Images requested per call.
pub const SAMPLES: u32 = 1;
/// Diffusion steps per image.
pub const STEPS: u32 = 30;

/// The request body sent for `prompt`.
pub fn image_request(prompt: &str) -> ImageGenerationRequest {
    ImageGenerationRequest::new(prompt, CFG_SCALE, HEIGHT, WIDTH, SAMPLES, STEPS)
}

/// Turns an image prompt into a rendered image, best effort.
///
/// Generation parameters are fixed and not exposed to callers. A missing
/// credential fails fast with a configuration error and no network call. Any
/// non-200 answer or transport failure is logged and reported as
/// [`ImageOutcome::Absent`].
#[derive(Clone)]
pub struct ImageGateway<T: ImageTransport> {
    transport: T,
    api_key: Option<String>,
}

impl<T: ImageTransport> ImageGateway<T> {
    /// Gateway over `transport` with an optional credential.
    pub fn new(transport: T, api_key: Option<String>) -> Self {
        Self { transport, api_key }
    }

    /// Gateway with the credential read from `STABILITY_API_KEY`, if set.
    pub fn from_env(transport: T) -> Self {
        let api_key = std::env::var(STABILITY_API_KEY_VAR).ok();
        if api_key.is_none() {
            tracing::warn!("{} not set; image rendering will be unavailable", STABILITY_API_KEY_VAR);
        }
        Self::new(transport, api_key)
    }

    /// True when a credential is configured.
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Render `prompt` into an image.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no credential is configured. Every
    /// other failure becomes `Ok(ImageOutcome::Absent)`.
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    pub async fn render(&self, prompt: &str) -> TaleweaverResult<ImageOutcome> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            ConfigError::new(format!("Missing Stability API key ({})", STABILITY_API_KEY_VAR))
        })?;

        let request = image_request(prompt);

        let response = match self.transport.send(&request, api_key).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "Image request failed");
                return Ok(ImageOutcome::Absent);
            }
        };

        if response.status != 200 {
            let diagnostic = ImageError::new(ImageErrorKind::Rejected {
                status: response.status,
                message: response.body_text(),
            });
            tracing::warn!(status = response.status, error = %diagnostic, "Image generation failed");
            return Ok(ImageOutcome::Absent);
        }

        if response.body.is_empty() {
            let diagnostic = ImageError::new(ImageErrorKind::EmptyPayload);
            tracing::warn!(error = %diagnostic, "Image generation failed");
            return Ok(ImageOutcome::Absent);
        }

        tracing::debug!(bytes = response.body.len(), "Image rendered");
        Ok(ImageOutcome::Rendered(RenderedImage::png(response.body)))
    }
}

impl<T: ImageTransport> std::fmt::Debug for ImageGateway<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageGateway")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}
