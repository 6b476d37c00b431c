//! Live tests against the OpenAI and Stability APIs.
//!
//! Run with: cargo test --package taleweaver_models --features api -- --ignored

#![cfg(feature = "api")]

use taleweaver_core::{GenerateRequest, PromptMessage};
use taleweaver_interface::TextGenerator;
use taleweaver_models::{ImageGateway, OpenAiClient, StabilityTransport};

#[tokio::test]
#[ignore] // Requires OPENAI_API_KEY
async fn test_openai_basic_generation() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let client = OpenAiClient::from_env()?;

    let request = GenerateRequest::from_messages(vec![
        PromptMessage::system("Answer with a single word."),
        PromptMessage::human("Name a color."),
    ]);
    let response = client.generate(&request).await?;

    assert!(!response.text().trim().is_empty());
    Ok(())
}

#[tokio::test]
#[ignore] // Requires STABILITY_API_KEY
async fn test_stability_render() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let gateway = ImageGateway::from_env(StabilityTransport::from_env());

    let outcome = gateway
        .render("A lighthouse on a cliff at dusk, hyper realistic style")
        .await?;

    let image = outcome.into_image().expect("image should be rendered");
    assert!(image.as_bytes().starts_with(&[0x89, b'P', b'N', b'G']));
    Ok(())
}
