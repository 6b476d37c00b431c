//! Request and response records for the story endpoints.

use serde::{Deserialize, Serialize};

/// Body of a continue-story request.
///
/// The caller owns the story so far and resends it with every turn.
///
/// # Examples
///
/// ```
/// use taleweaver_core::StoryInput;
///
/// let input: StoryInput = serde_json::from_str(
///     r#"{"story_context": "A dragon sleeps.", "user_input": "I tiptoe past."}"#,
/// ).unwrap();
/// assert_eq!(input.user_input, "I tiptoe past.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoryInput {
    /// Narrative text accumulated so far
    pub story_context: String,
    /// The player's chosen action
    pub user_input: String,
}

/// Body returned by the story endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoryResponse {
    /// Newly generated narrative text
    pub story_text: String,
}

impl From<String> for StoryResponse {
    fn from(story_text: String) -> Self {
        Self { story_text }
    }
}
