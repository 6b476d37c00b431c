//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Taleweaver - interactive stories with generated illustrations
#[derive(Parser, Debug)]
#[command(name = "taleweaver")]
#[command(about = "Interactive stories with generated illustrations", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Configuration file layered over the bundled defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open a new story on a random theme
    Start {
        /// Candidate theme (repeatable); defaults to the configured themes
        #[arg(long = "theme")]
        themes: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Continue a story with the reader's action
    Continue {
        /// Story so far
        #[arg(long, conflicts_with = "story_file", required_unless_present = "story_file")]
        story: Option<String>,

        /// File holding the story so far
        #[arg(long)]
        story_file: Option<PathBuf>,

        /// The reader's action
        #[arg(long)]
        input: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render an image for a passage
    Illustrate {
        /// Passage to illustrate
        #[arg(long, conflicts_with = "text_file", required_unless_present = "text_file")]
        text: Option<String>,

        /// File holding the passage
        #[arg(long)]
        text_file: Option<PathBuf>,

        /// Write the PNG here instead of printing base64
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Start a story, act once, and illustrate both turns
    Demo {
        /// The reader's action for the second turn
        #[arg(long, default_value = "I want to smoke.")]
        action: String,

        /// Directory for generated_image_1.png and generated_image_2.png
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },
}
