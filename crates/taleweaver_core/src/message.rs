//! Rendered prompt messages.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A role-tagged unit of a rendered prompt with every placeholder resolved.
///
/// # Examples
///
/// ```
/// use taleweaver_core::{PromptMessage, Role};
///
/// let message = PromptMessage::human("I light a torch.");
///
/// assert_eq!(message.role, Role::Human);
/// assert_eq!(message.content, "I light a torch.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PromptMessage {
    /// The role of the message sender
    pub role: Role,
    /// Fully substituted message text
    pub content: String,
}

impl PromptMessage {
    /// Create a message with the given role.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Create a human message.
    pub fn human(content: impl Into<String>) -> Self {
        Self::new(Role::Human, content)
    }
}
