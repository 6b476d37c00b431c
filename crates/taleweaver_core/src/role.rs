//! Role types for prompt participants.

use serde::{Deserialize, Serialize};

/// Who a prompt message speaks for.
///
/// Position matters to the backend: system instructions come before human
/// input, and trailing system reinforcement comes after it.
///
/// # Examples
///
/// ```
/// use taleweaver_core::Role;
///
/// assert_ne!(Role::System, Role::Human);
/// assert_eq!(format!("{}", Role::Human), "human");
/// assert_eq!(Role::Human.as_wire(), "user");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions to the backend
    #[display("system")]
    System,
    /// Input from the person playing the story
    #[display("human")]
    Human,
    /// Earlier output from the backend
    #[display("assistant")]
    Assistant,
}

impl Role {
    /// Role name used by OpenAI-style chat APIs.
    pub fn as_wire(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::Human => "user",
            Role::Assistant => "assistant",
        }
    }
}
