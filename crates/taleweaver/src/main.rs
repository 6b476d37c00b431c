//! Taleweaver CLI binary.
//!
//! This binary provides command-line access to the story operations:
//! - Start a story on a theme
//! - Continue a story with the reader's action
//! - Illustrate a passage
//! - Run a two-turn demo

use clap::Parser;
use taleweaver::{LoggingConfig, TaleweaverConfig, init_logging, storyteller_from_env};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, continue_story, demo, illustrate, start_story};

    // Credentials may live in .env
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    init_logging(LoggingConfig::new(log_level).with_json_logs(cli.json_logs))?;

    let config = match &cli.config {
        Some(path) => TaleweaverConfig::from_file(path)?,
        None => TaleweaverConfig::load()?,
    };
    let storyteller = storyteller_from_env(&config)?;

    match cli.command {
        Commands::Start { themes, json } => {
            start_story(&storyteller, themes, json).await?;
        }

        Commands::Continue {
            story,
            story_file,
            input,
            json,
        } => {
            continue_story(&storyteller, story, story_file, input, json).await?;
        }

        Commands::Illustrate {
            text,
            text_file,
            output,
        } => {
            illustrate(&storyteller, text, text_file, output).await?;
        }

        Commands::Demo { action, output_dir } => {
            demo(&storyteller, action, output_dir).await?;
        }
    }

    Ok(())
}
