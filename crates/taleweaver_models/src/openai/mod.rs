//! OpenAI-compatible chat completion backend.

mod client;
mod convert;
mod request;
mod response;

pub use client::{OPENAI_API_KEY_VAR, OpenAiClient, OpenAiConfig, OpenAiConfigBuilder};
pub use request::{ChatCompletionRequest, ChatCompletionRequestBuilder, ChatMessage};
pub use response::{ChatCompletionResponse, Choice, ChoiceMessage, Usage};
