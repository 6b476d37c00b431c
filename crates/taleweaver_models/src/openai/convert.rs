//! Conversion between Taleweaver and chat completion API types

use super::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use taleweaver_core::{GenerateRequest, GenerateResponse, PromptMessage};
use taleweaver_error::{BackendError, BackendErrorKind};

/// Convert a GenerateRequest to a ChatCompletionRequest.
///
/// Message order is preserved exactly; request-level options win over the
/// client defaults passed in.
#[tracing::instrument(skip(request), fields(messages = request.messages().len()))]
pub fn to_chat_request(
    request: &GenerateRequest,
    model: &str,
    default_temperature: Option<f32>,
    default_max_tokens: Option<u32>,
) -> Result<ChatCompletionRequest, BackendError> {
    let messages = request
        .messages()
        .iter()
        .map(to_chat_message)
        .collect::<Vec<_>>();

    ChatCompletionRequest::builder()
        .model(request.model().clone().unwrap_or_else(|| model.to_string()))
        .messages(messages)
        .max_tokens((*request.max_tokens()).or(default_max_tokens))
        .temperature((*request.temperature()).or(default_temperature))
        .build()
        .map_err(|e| {
            BackendError::new(BackendErrorKind::InvalidRequest(format!(
                "Failed to build request: {}",
                e
            )))
        })
}

fn to_chat_message(message: &PromptMessage) -> ChatMessage {
    ChatMessage::new(message.role.as_wire(), message.content.clone())
}

/// Extract the generated text from a ChatCompletionResponse.
#[tracing::instrument(skip(response), fields(choices = response.choices().len()))]
pub fn from_chat_response(response: ChatCompletionResponse) -> Result<GenerateResponse, BackendError> {
    let choice = response
        .choices()
        .first()
        .ok_or_else(|| BackendError::new(BackendErrorKind::EmptyResponse))?;

    // Refusals, content-filter stops and tool calls carry no text
    let text = choice
        .message()
        .content()
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| {
            tracing::warn!(finish_reason = ?choice.finish_reason(), "Choice has no text");
            BackendError::new(BackendErrorKind::EmptyResponse)
        })?;
    Ok(GenerateResponse::new(text.to_string()))
}
