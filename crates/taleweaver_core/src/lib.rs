//! Core data types for Taleweaver.
//!
//! This crate provides the plain data that flows through the generation
//! pipeline: role-tagged prompt messages, backend requests and responses,
//! story themes, content delimiters, and rendered images.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod delimiter;
mod image;
mod message;
mod request;
mod role;
mod story;
mod theme;

pub use delimiter::Delimiter;
pub use image::{ImageOutcome, RenderedImage};
pub use message::PromptMessage;
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use role::Role;
pub use story::{StoryInput, StoryResponse};
pub use theme::{DEFAULT_THEMES, Theme, default_themes, pick_theme, pick_theme_with};
