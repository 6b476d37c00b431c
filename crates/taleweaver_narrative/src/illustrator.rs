//! Text-to-image orchestration.

use crate::ImagePromptChain;
use taleweaver_core::{Delimiter, ImageOutcome};
use taleweaver_error::TaleweaverResult;
use taleweaver_interface::{ImageTransport, TextGenerator};
use taleweaver_models::ImageGateway;
use tracing::{info, instrument, warn};

/// Result of illustrating a passage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Illustration {
    /// Prompt sent to the image model, if one was generated
    pub prompt: Option<String>,
    /// The rendered image or its absence
    pub image: ImageOutcome,
}

/// Runs the image-prompt chain and then the image gateway.
///
/// Text generation failures propagate. Imaging failures, including a missing
/// imaging credential, yield [`ImageOutcome::Absent`].
#[derive(Debug, Clone)]
pub struct Illustrator<G: TextGenerator, T: ImageTransport> {
    prompt_chain: ImagePromptChain<G>,
    gateway: ImageGateway<T>,
}

impl<G: TextGenerator, T: ImageTransport> Illustrator<G, T> {
    /// Pair a text backend with an image gateway.
    pub fn new(
        generator: G,
        gateway: ImageGateway<T>,
        delimiter: &Delimiter,
    ) -> TaleweaverResult<Self> {
        Ok(Self {
            prompt_chain: ImagePromptChain::new(generator, delimiter)?,
            gateway,
        })
    }

    /// The image-prompt chain.
    pub fn prompt_chain(&self) -> &ImagePromptChain<G> {
        &self.prompt_chain
    }

    /// The image gateway.
    pub fn gateway(&self) -> &ImageGateway<T> {
        &self.gateway
    }

    /// Illustrate `text`, returning only the image outcome.
    pub async fn illustrate(&self, text: &str) -> TaleweaverResult<ImageOutcome> {
        Ok(self.illustrate_detailed(text).await?.image)
    }

    /// Illustrate `text`, keeping the generated prompt.
    ///
    /// Without an imaging credential no prompt is generated.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn illustrate_detailed(&self, text: &str) -> TaleweaverResult<Illustration> {
        if !self.gateway.has_credential() {
            warn!("No imaging credential configured; skipping illustration");
            return Ok(Illustration {
                prompt: None,
                image: ImageOutcome::Absent,
            });
        }

        let prompt = self.prompt_chain.invoke(text).await?;
        info!(prompt_len = prompt.len(), "Generated image prompt");

        let image = match self.gateway.render(&prompt).await {
            Ok(image) => image,
            Err(e) if e.is_config() => {
                warn!(error = %e, "Image gateway is not configured");
                ImageOutcome::Absent
            }
            Err(e) => return Err(e),
        };

        Ok(Illustration {
            prompt: Some(prompt),
            image,
        })
    }
}
