//! Taleweaver - interactive storytelling with generated illustrations.
//!
//! Taleweaver opens a story from a theme, continues it with the reader's
//! actions, and illustrates any passage by turning it into an image prompt
//! and rendering that prompt with a text-to-image service.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use taleweaver::{Storyteller, TaleweaverConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = TaleweaverConfig::load()?;
//!     let storyteller = taleweaver::storyteller_from_env(&config)?;
//!
//!     let intro = storyteller.start_story(None).await?;
//!     let next = storyteller.continue_story(&intro, "I want to smoke.").await?;
//!     if let Some(image) = storyteller.illustrate(&next).await?.image() {
//!         std::fs::write("scene.png", image.as_bytes())?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `taleweaver_error` - Error types
//! - `taleweaver_core` - Messages, themes, delimiters and image results
//! - `taleweaver_interface` - `TextGenerator` and `ImageTransport` traits
//! - `taleweaver_models` - OpenAI and Stability backends, image gateway
//! - `taleweaver_narrative` - Templates, chains and the `Storyteller`
//! - `taleweaver` - Configuration, logging and the CLI

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod observability;

pub use config::{ImageConfig, StoryConfig, TaleweaverConfig, TextConfig};
pub use observability::{LoggingConfig, init_logging};

pub use taleweaver_core::{
    DEFAULT_THEMES, Delimiter, ImageOutcome, PromptMessage, RenderedImage, Role, StoryInput,
    StoryResponse, Theme, default_themes, pick_theme,
};
pub use taleweaver_error::{
    BackendError, BackendErrorKind, ConfigError, ImageError, ImageErrorKind, TaleweaverError,
    TaleweaverErrorKind, TaleweaverResult, TemplateError, TemplateErrorKind,
};
pub use taleweaver_interface::{ImageTransport, TextGenerator};
pub use taleweaver_models::{
    ImageGateway, OPENAI_API_KEY_VAR, OpenAiClient, OpenAiConfig, STABILITY_API_KEY_VAR,
    StabilityConfig, StabilityTransport,
};
pub use taleweaver_narrative::{
    Bindings, Chain, Illustration, Illustrator, PromptTemplate, Storyteller, StorytellerConfig,
    clean_image_prompt, continue_story_chain, start_story_chain,
};

/// Storyteller over the production backends.
pub type DefaultStoryteller = Storyteller<OpenAiClient, StabilityTransport>;

/// Build the production storyteller from `config` and credentials in the environment.
///
/// # Errors
///
/// Fails when `OPENAI_API_KEY` is unset. A missing `STABILITY_API_KEY` only
/// disables illustration.
pub fn storyteller_from_env(config: &TaleweaverConfig) -> TaleweaverResult<DefaultStoryteller> {
    let api_key = std::env::var(OPENAI_API_KEY_VAR)
        .map_err(|e| ConfigError::new(format!("{} not set: {}", OPENAI_API_KEY_VAR, e)))?;
    let client = OpenAiClient::new(config.openai_config(api_key)?);

    let transport = StabilityTransport::new(config.stability_config()?);
    let gateway = ImageGateway::from_env(transport);

    Storyteller::new(client, gateway, config.storyteller_config())
}
