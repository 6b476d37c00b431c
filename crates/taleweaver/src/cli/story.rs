//! Story command handlers.

use std::path::{Path, PathBuf};
use taleweaver::{DefaultStoryteller, ImageOutcome, StoryInput, StoryResponse, Theme};
use tracing::{info, warn};

type CliResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Text given inline or through a file.
fn read_text(inline: Option<String>, file: Option<PathBuf>) -> CliResult<String> {
    match (inline, file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => Ok(std::fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?),
        (None, None) => Err("No text given".into()),
    }
}

fn print_story(text: String, json: bool) -> CliResult {
    if json {
        println!("{}", serde_json::to_string_pretty(&StoryResponse::from(text))?);
    } else {
        println!("{}", text);
    }
    Ok(())
}

/// Handle `start`.
pub async fn start_story(
    storyteller: &DefaultStoryteller,
    themes: Vec<String>,
    json: bool,
) -> CliResult {
    let themes: Vec<Theme> = themes.into_iter().map(Theme::from).collect();
    let text = storyteller.start_story(Some(themes.as_slice())).await?;
    print_story(text, json)
}

/// Handle `continue`.
pub async fn continue_story(
    storyteller: &DefaultStoryteller,
    story: Option<String>,
    story_file: Option<PathBuf>,
    user_input: String,
    json: bool,
) -> CliResult {
    let input = StoryInput {
        story_context: read_text(story, story_file)?,
        user_input,
    };
    let response = storyteller.continue_story_input(&input).await?;
    print_story(response.story_text, json)
}

/// Handle `illustrate`.
pub async fn illustrate(
    storyteller: &DefaultStoryteller,
    text: Option<String>,
    text_file: Option<PathBuf>,
    output: Option<PathBuf>,
) -> CliResult {
    let text = read_text(text, text_file)?;
    let outcome = storyteller.illustrate(&text).await?;

    match (outcome, output) {
        (ImageOutcome::Rendered(image), Some(path)) => {
            std::fs::write(&path, image.as_bytes())?;
            info!(path = %path.display(), bytes = image.len(), "Image saved");
        }
        (ImageOutcome::Rendered(image), None) => {
            println!("{}", image.to_base64());
        }
        (ImageOutcome::Absent, _) => {
            warn!("No image was produced");
        }
    }
    Ok(())
}

fn save_image(outcome: &ImageOutcome, dir: &Path, name: &str) -> CliResult {
    match outcome.image() {
        Some(image) => {
            let path = dir.join(name);
            std::fs::write(&path, image.as_bytes())?;
            println!("Image saved to {}", path.display());
        }
        None => println!("No image for this turn."),
    }
    Ok(())
}

/// Handle `demo`: two illustrated turns.
pub async fn demo(storyteller: &DefaultStoryteller, action: String, output_dir: PathBuf) -> CliResult {
    std::fs::create_dir_all(&output_dir)?;

    let intro = storyteller.start_story(None).await?;
    println!("{}\n", intro);

    let first = storyteller.illustrate_detailed(&intro).await?;
    if let Some(prompt) = &first.prompt {
        println!("Image prompt: {}\n", prompt);
    }
    save_image(&first.image, &output_dir, "generated_image_1.png")?;

    println!("\n> {}\n", action);
    let next = storyteller.continue_story(&intro, &action).await?;
    println!("{}\n", next);

    let second = storyteller.illustrate_detailed(&next).await?;
    if let Some(prompt) = &second.prompt {
        println!("Image prompt: {}\n", prompt);
    }
    save_image(&second.image, &output_dir, "generated_image_2.png")?;

    Ok(())
}
