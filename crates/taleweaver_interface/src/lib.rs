//! Trait definitions for Taleweaver backends.
//!
//! The generation pipeline talks to two opaque remote services. Each is
//! reached through one trait so the pipeline can be exercised against stubs:
//!
//! - [`TextGenerator`]: ordered role-tagged messages in, plain text out
//! - [`ImageTransport`]: one HTTP exchange with the text-to-image service

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{ImageTransport, TextGenerator};
pub use types::{
    ImageGenerationRequest, ImageGenerationRequestBuilder, TextPrompt, TransportResponse,
};
