//! Top-level error wrapper types.

use crate::{BackendError, ConfigError, ImageError, TemplateError};

/// Every failure a Taleweaver operation can report.
///
/// # Examples
///
/// ```
/// use taleweaver_error::{BackendError, BackendErrorKind, TaleweaverError};
///
/// let backend_err = BackendError::new(BackendErrorKind::EmptyResponse);
/// let err: TaleweaverError = backend_err.into();
/// assert!(err.is_backend());
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum TaleweaverErrorKind {
    /// Configuration error (missing credential, unreadable config file)
    #[from(ConfigError)]
    Config(ConfigError),
    /// Template parse or binding error
    #[from(TemplateError)]
    Template(TemplateError),
    /// Text-generation backend error
    #[from(BackendError)]
    Backend(BackendError),
    /// Image backend error
    #[from(ImageError)]
    Image(ImageError),
}

/// Taleweaver error with kind discrimination.
///
/// # Examples
///
/// ```
/// use taleweaver_error::{ConfigError, TaleweaverErrorKind, TaleweaverResult};
///
/// fn might_fail() -> TaleweaverResult<()> {
///     Err(ConfigError::new("STABILITY_API_KEY not set"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), TaleweaverErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Taleweaver Error: {}", _0)]
pub struct TaleweaverError(Box<TaleweaverErrorKind>);

impl TaleweaverError {
    /// Create a new error from a kind.
    pub fn new(kind: TaleweaverErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &TaleweaverErrorKind {
        &self.0
    }

    /// True when a required placeholder was left unbound.
    pub fn is_missing_binding(&self) -> bool {
        matches!(
            self.kind(),
            TaleweaverErrorKind::Template(e) if matches!(e.kind, crate::TemplateErrorKind::MissingBinding(_))
        )
    }

    /// True for configuration faults.
    pub fn is_config(&self) -> bool {
        matches!(self.kind(), TaleweaverErrorKind::Config(_))
    }

    /// True for text-generation backend failures.
    pub fn is_backend(&self) -> bool {
        matches!(self.kind(), TaleweaverErrorKind::Backend(_))
    }
}

// Generic From implementation for any type that converts to TaleweaverErrorKind
impl<T> From<T> for TaleweaverError
where
    T: Into<TaleweaverErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Taleweaver operations.
pub type TaleweaverResult<T> = std::result::Result<T, TaleweaverError>;
