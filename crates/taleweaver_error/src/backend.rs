//! Text-generation backend error types.

/// Ways a call to the text-generation backend can fail.
///
/// None of these are retried; the failed turn is reported to the caller and
/// no partial text is returned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BackendErrorKind {
    /// Transport failure before a response arrived
    #[display("HTTP request failed: {}", _0)]
    Http(String),
    /// Backend answered with a non-success status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Body returned by the backend
        message: String,
    },
    /// Response body did not match the expected shape
    #[display("Failed to deserialize response: {}", _0)]
    Deserialization(String),
    /// Request could not be assembled
    #[display("Invalid request: {}", _0)]
    InvalidRequest(String),
    /// Backend returned no generated text
    #[display("Backend returned no choices")]
    EmptyResponse,
    /// Blocking invocation could not start an executor
    #[display("Runtime error: {}", _0)]
    Runtime(String),
}

/// Text-generation backend error with location tracking.
///
/// # Examples
///
/// ```
/// use taleweaver_error::{BackendError, BackendErrorKind};
///
/// let err = BackendError::new(BackendErrorKind::Api {
///     status: 503,
///     message: "overloaded".into(),
/// });
/// assert!(err.to_string().contains("503"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Backend Error: {} at line {} in {}", kind, line, file)]
pub struct BackendError {
    /// The specific error condition
    pub kind: BackendErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl BackendError {
    /// Create a new BackendError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: BackendErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
