//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the taleweaver binary.

mod commands;
mod story;

pub use commands::{Cli, Commands};
pub use story::{continue_story, demo, illustrate, start_story};
