//! Prompt template error types.

/// Specific error conditions for prompt templates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TemplateErrorKind {
    /// A required placeholder had no value at render time
    #[display("Missing value for placeholder '{}'", _0)]
    MissingBinding(String),
    /// A `{` opened a placeholder that was never closed
    #[display("Unterminated placeholder starting at byte {}", _0)]
    UnterminatedPlaceholder(usize),
    /// Placeholder body is not a valid identifier
    #[display("Invalid placeholder '{}'", _0)]
    InvalidPlaceholder(String),
    /// A `}` appeared without a matching `{`
    #[display("Unmatched '}}' at byte {}", _0)]
    UnmatchedBrace(usize),
    /// Placeholder scanner could not be built
    #[display("Template pattern error: {}", _0)]
    Pattern(String),
    /// Placeholder already fixed by an earlier partial binding
    #[display("Placeholder '{}' is already bound", _0)]
    AlreadyBound(String),
}

/// Error type for template parsing and rendering.
///
/// # Examples
///
/// ```
/// use taleweaver_error::{TemplateError, TemplateErrorKind};
///
/// let err = TemplateError::new(TemplateErrorKind::MissingBinding("user_input".into()));
/// assert!(format!("{}", err).contains("user_input"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Template Error: {} at line {} in {}", kind, line, file)]
pub struct TemplateError {
    /// The specific error condition
    pub kind: TemplateErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl TemplateError {
    /// Create a new TemplateError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TemplateErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
