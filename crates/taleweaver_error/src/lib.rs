//! Error types for Taleweaver.
//!
//! This crate provides the error taxonomy shared by every Taleweaver crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! The failure classes of the generation pipeline map onto these types:
//!
//! | failure | type | policy |
//! |---|---|---|
//! | template invoked without a required value | [`TemplateError`] (`MissingBinding`) | surfaced |
//! | required backend credential absent | [`ConfigError`] | surfaced on the text path |
//! | text-generation backend failure | [`BackendError`] | surfaced |
//! | image backend refused the request | [`ImageError`] | logged, absorbed into an absent image |
//!
//! # Examples
//!
//! ```
//! use taleweaver_error::{TaleweaverResult, TemplateError, TemplateErrorKind};
//!
//! fn render() -> TaleweaverResult<String> {
//!     Err(TemplateError::new(TemplateErrorKind::MissingBinding("theme".into())))?
//! }
//!
//! assert!(render().unwrap_err().to_string().contains("theme"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod config;
mod error;
mod image;
mod template;

pub use backend::{BackendError, BackendErrorKind};
pub use config::ConfigError;
pub use error::{TaleweaverError, TaleweaverErrorKind, TaleweaverResult};
pub use image::{ImageError, ImageErrorKind};
pub use template::{TemplateError, TemplateErrorKind};
