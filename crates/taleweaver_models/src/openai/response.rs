use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// OpenAI-compatible chat completion response.
///
/// Only `choices` is required; compatible servers differ on the rest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Getters)]
pub struct ChatCompletionResponse {
    /// Unique identifier for the completion
    #[serde(default)]
    id: String,
    /// Model used for completion
    #[serde(default)]
    model: String,
    /// Generated completions
    choices: Vec<Choice>,
    /// Token usage statistics
    #[serde(default)]
    usage: Option<Usage>,
}

/// A completion choice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Getters)]
pub struct Choice {
    /// Index of this choice
    #[serde(default)]
    index: u32,
    /// The generated message
    message: ChoiceMessage,
    /// Reason why generation finished
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Message in a choice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Getters)]
pub struct ChoiceMessage {
    /// Role of the message (typically "assistant")
    role: String,
    /// Generated content; null when the model refused or called a tool
    #[serde(default)]
    content: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Getters)]
pub struct Usage {
    /// Tokens in the prompt
    prompt_tokens: u32,
    /// Tokens in the completion
    completion_tokens: u32,
    /// Total tokens used
    total_tokens: u32,
}
