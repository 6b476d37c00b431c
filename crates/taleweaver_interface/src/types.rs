//! Wire types shared by image transports.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One weighted text prompt in a text-to-image request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextPrompt {
    /// Prompt text
    pub text: String,
}

/// JSON body of a text-to-image request.
///
/// # Examples
///
/// ```
/// use taleweaver_interface::{ImageGenerationRequest, TextPrompt};
///
/// let request = ImageGenerationRequest::builder()
///     .text_prompts(vec![TextPrompt { text: "a lighthouse at dusk".into() }])
///     .cfg_scale(7u32)
///     .height(1024u32)
///     .width(1024u32)
///     .samples(1u32)
///     .steps(30u32)
///     .build()
///     .unwrap();
///
/// let body = serde_json::to_value(&request).unwrap();
/// assert_eq!(body["text_prompts"][0]["text"], "a lighthouse at dusk");
/// assert_eq!(body["steps"], 30);
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ImageGenerationRequest {
    /// Prompts describing the image
    text_prompts: Vec<TextPrompt>,
    /// Classifier-free guidance scale
    cfg_scale: u32,
    /// Image height in pixels
    height: u32,
    /// Image width in pixels
    width: u32,
    /// Number of images to generate
    samples: u32,
    /// Diffusion step count
    steps: u32,
}

impl ImageGenerationRequest {
    /// Request for a single prompt with explicit generation parameters.
    pub fn new(
        prompt: impl Into<String>,
        cfg_scale: u32,
        height: u32,
        width: u32,
        samples: u32,
        steps: u32,
    ) -> Self {
        Self {
            text_prompts: vec![TextPrompt {
                text: prompt.into(),
            }],
            cfg_scale,
            height,
            width,
            samples,
            steps,
        }
    }

    /// Creates a new builder for `ImageGenerationRequest`.
    pub fn builder() -> ImageGenerationRequestBuilder {
        ImageGenerationRequestBuilder::default()
    }
}

/// Status and body of an image service response.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Build a response from status and body.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
