//! Live end-to-end story tests.
//!
//! Run with: cargo test --package taleweaver --features api -- --ignored

#![cfg(feature = "api")]

use taleweaver::{TaleweaverConfig, Theme, storyteller_from_env};

#[tokio::test]
#[ignore] // Requires OPENAI_API_KEY and STABILITY_API_KEY
async fn test_two_turn_story() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let config = TaleweaverConfig::load()?;
    let storyteller = storyteller_from_env(&config)?;

    let intro = storyteller
        .start_story_with_theme(&Theme::new("Fantasy"))
        .await?;
    assert!(!intro.trim().is_empty());

    let next = storyteller.continue_story(&intro, "I want to smoke.").await?;
    assert!(!next.trim().is_empty());

    let illustration = storyteller.illustrate_detailed(&next).await?;
    assert!(illustration.prompt.is_some());
    Ok(())
}
