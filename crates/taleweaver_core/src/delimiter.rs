//! Fences that separate instructions from untrusted text.

use serde::{Deserialize, Serialize};

/// Marker wrapped around caller-supplied text before it is interpolated into
/// an instructional template.
///
/// The same value has to appear both around the field and in the sentence
/// telling the backend where the field is, so prompt templates bind it once
/// under the `delimiter` placeholder and reference it from both places.
///
/// # Examples
///
/// ```
/// use taleweaver_core::Delimiter;
///
/// let fence = Delimiter::default();
/// assert_eq!(fence.as_str(), "```");
/// assert_eq!(fence.unwrap_from("```Fantasy```"), "Fantasy");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(transparent)]
pub struct Delimiter(String);

impl Delimiter {
    /// Placeholder name templates use to reference the delimiter.
    pub const PLACEHOLDER: &'static str = "delimiter";

    /// Fence used when nothing else is configured.
    pub const DEFAULT: &'static str = "```";

    /// Create a delimiter from any marker string.
    pub fn new(marker: impl Into<String>) -> Self {
        Self(marker.into())
    }

    /// The marker text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Remove one layer of this marker if it surrounds `text`.
    pub fn unwrap_from<'a>(&self, text: &'a str) -> &'a str {
        if self.0.is_empty() {
            return text;
        }
        text.strip_prefix(self.0.as_str())
            .and_then(|rest| rest.strip_suffix(self.0.as_str()))
            .unwrap_or(text)
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl From<&str> for Delimiter {
    fn from(marker: &str) -> Self {
        Self::new(marker)
    }
}

impl From<String> for Delimiter {
    fn from(marker: String) -> Self {
        Self(marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwrap_from_strips_one_layer() {
        let fence = Delimiter::new("###");
        assert_eq!(fence.unwrap_from("###a misty harbor###"), "a misty harbor");
        assert_eq!(fence.unwrap_from("a misty harbor"), "a misty harbor");
        assert_eq!(fence.unwrap_from("###unbalanced"), "###unbalanced");
    }

    #[test]
    fn test_empty_marker_leaves_text_alone() {
        let fence = Delimiter::new("");
        assert_eq!(fence.unwrap_from("x"), "x");
    }
}
