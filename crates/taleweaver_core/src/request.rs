//! Request and response types for text generation.

use crate::PromptMessage;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Generation request handed to a text backend.
///
/// # Examples
///
/// ```
/// use taleweaver_core::{GenerateRequest, PromptMessage};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![PromptMessage::human("Hello!")])
///     .temperature(Some(0.7f32))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages().len(), 1);
/// assert_eq!(*request.max_tokens(), None);
/// ```
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, Default, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// The ordered prompt messages to send
    messages: Vec<PromptMessage>,
    /// Maximum number of tokens to generate
    #[builder(default)]
    max_tokens: Option<u32>,
    /// Sampling temperature
    #[builder(default)]
    temperature: Option<f32>,
    /// Model identifier override
    #[builder(default)]
    model: Option<String>,
}

impl GenerateRequest {
    /// Creates a new builder for `GenerateRequest`.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }

    /// Request carrying only messages, all options left to the backend.
    pub fn from_messages(messages: Vec<PromptMessage>) -> Self {
        Self {
            messages,
            ..Default::default()
        }
    }
}

/// Plain-text result of a generation call.
///
/// # Examples
///
/// ```
/// use taleweaver_core::GenerateResponse;
///
/// let response = GenerateResponse::new("Once upon a time");
/// assert_eq!(response.text(), "Once upon a time");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GenerateResponse {
    /// Generated text, not further parsed
    text: String,
}

impl GenerateResponse {
    /// Wrap generated text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Take ownership of the generated text.
    pub fn into_text(self) -> String {
        self.text
    }
}
