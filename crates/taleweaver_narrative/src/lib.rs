//! Prompt templates, generation chains and story orchestration for Taleweaver.
//!
//! This crate turns a [`TextGenerator`](taleweaver_interface::TextGenerator)
//! and an [`ImageGateway`](taleweaver_models::ImageGateway) into the three
//! story operations: start a story, continue it, and illustrate a passage.
//!
//! # Layers
//!
//! - [`PromptTemplate`]: role-tagged messages with `{name}` placeholders and
//!   partial binding
//! - [`Chain`]: a template bound to a backend with one input left open
//! - [`start_story_chain`], [`continue_story_chain`], [`ImagePromptChain`]:
//!   the concrete chains
//! - [`Illustrator`]: image-prompt chain followed by the image gateway
//! - [`Storyteller`]: the facade callers use
//!
//! # Example
//!
//! ```rust,ignore
//! use taleweaver_models::{ImageGateway, OpenAiClient, StabilityTransport};
//! use taleweaver_narrative::{Storyteller, StorytellerConfig};
//!
//! # async fn example() -> taleweaver_error::TaleweaverResult<()> {
//! let client = OpenAiClient::from_env()?;
//! let gateway = ImageGateway::from_env(StabilityTransport::from_env());
//! let storyteller = Storyteller::new(client, gateway, StorytellerConfig::default())?;
//!
//! let intro = storyteller.start_story(None).await?;
//! let picture = storyteller.illustrate(&intro).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chain;
mod illustrator;
mod image_prompt;
pub mod prompts;
mod story;
mod storyteller;
mod template;

pub use chain::{Chain, GenerationOptions, GenerationOptionsBuilder};
pub use illustrator::{Illustration, Illustrator};
pub use image_prompt::{ImagePromptChain, clean_image_prompt, image_prompt_template};
pub use story::{
    continue_story_chain, continue_story_template, start_story_chain, start_story_template,
};
pub use storyteller::{Storyteller, StorytellerConfig, StorytellerConfigBuilder};
pub use template::{Bindings, PromptTemplate};
