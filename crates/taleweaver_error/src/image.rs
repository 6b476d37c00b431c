//! Image backend error types.

/// Failure conditions reported by the image backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ImageErrorKind {
    /// Transport failure before a response arrived
    #[display("HTTP request failed: {}", _0)]
    Http(String),
    /// Backend answered with a non-200 status
    #[display("Image backend rejected request with {}: {}", status, message)]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Diagnostic text returned by the backend
        message: String,
    },
    /// Backend answered 200 without an image payload
    #[display("Image backend returned an empty payload")]
    EmptyPayload,
}

/// Image backend error with location tracking.
///
/// The gateway logs these and reports an absent image instead of failing,
/// so they only escape through the raw transport.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Image Error: {} at line {} in {}", kind, line, file)]
pub struct ImageError {
    /// The specific error condition
    pub kind: ImageErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ImageError {
    /// Create a new ImageError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ImageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
