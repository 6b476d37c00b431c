//! Backend integrations for Taleweaver.
//!
//! - [`OpenAiClient`]: OpenAI-compatible chat completion service implementing
//!   [`TextGenerator`](taleweaver_interface::TextGenerator)
//! - [`StabilityTransport`]: HTTP transport for a Stability-style text-to-image
//!   endpoint implementing [`ImageTransport`](taleweaver_interface::ImageTransport)
//! - [`ImageGateway`]: fixed-parameter, best-effort image rendering on top of
//!   any transport
//!
//! # Example
//!
//! ```no_run
//! use taleweaver_core::{GenerateRequest, PromptMessage};
//! use taleweaver_interface::TextGenerator;
//! use taleweaver_models::{ImageGateway, OpenAiClient, StabilityTransport};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAiClient::from_env()?;
//! let request = GenerateRequest::from_messages(vec![PromptMessage::human("Describe a harbor")]);
//! let text = client.generate(&request).await?;
//!
//! let gateway = ImageGateway::from_env(StabilityTransport::from_env());
//! let image = gateway.render(text.text()).await?;
//! println!("image absent: {}", image.is_absent());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod openai;
mod stability;

pub use openai::{
    ChatCompletionRequest, ChatCompletionRequestBuilder, ChatCompletionResponse, ChatMessage,
    Choice, ChoiceMessage, OPENAI_API_KEY_VAR, OpenAiClient, OpenAiConfig, OpenAiConfigBuilder,
    Usage,
};
pub use stability::{
    API_HOST_VAR, CFG_SCALE, HEIGHT, ImageGateway, SAMPLES, STABILITY_API_KEY_VAR, STEPS,
    StabilityConfig, StabilityConfigBuilder, StabilityTransport, WIDTH, image_request,
};
