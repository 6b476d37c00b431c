//! Rendered image payloads.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// Binary image returned by the image backend.
///
/// Kept as raw bytes; choosing a wire encoding is left to whoever serves it.
///
/// # Examples
///
/// ```
/// use taleweaver_core::RenderedImage;
///
/// let image = RenderedImage::png(vec![0x89, b'P', b'N', b'G']);
/// assert_eq!(image.len(), 4);
/// assert_eq!(image.mime(), "image/png");
/// assert_eq!(image.to_base64(), "iVBORw==");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RenderedImage {
    bytes: Vec<u8>,
    mime: String,
}

impl RenderedImage {
    /// Wrap image bytes with their MIME type.
    pub fn new(bytes: Vec<u8>, mime: impl Into<String>) -> Self {
        Self {
            bytes,
            mime: mime.into(),
        }
    }

    /// Wrap PNG bytes.
    pub fn png(bytes: Vec<u8>) -> Self {
        Self::new(bytes, "image/png")
    }

    /// Raw image bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Take ownership of the raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// MIME type of the payload.
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True for a zero-byte payload.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Standard base64 encoding of the payload.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }
}

/// Result of best-effort image generation.
///
/// `Absent` is a normal terminal state, not an error: the story carries on
/// without a picture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "image", rename_all = "lowercase")]
pub enum ImageOutcome {
    /// The backend produced an image
    Rendered(RenderedImage),
    /// No image is available for this turn
    Absent,
}

impl ImageOutcome {
    /// True when no image was produced.
    pub fn is_absent(&self) -> bool {
        matches!(self, ImageOutcome::Absent)
    }

    /// Borrow the image, if any.
    pub fn image(&self) -> Option<&RenderedImage> {
        match self {
            ImageOutcome::Rendered(image) => Some(image),
            ImageOutcome::Absent => None,
        }
    }

    /// Take the image, if any.
    pub fn into_image(self) -> Option<RenderedImage> {
        match self {
            ImageOutcome::Rendered(image) => Some(image),
            ImageOutcome::Absent => None,
        }
    }
}

impl From<Option<RenderedImage>> for ImageOutcome {
    fn from(image: Option<RenderedImage>) -> Self {
        image.map_or(ImageOutcome::Absent, ImageOutcome::Rendered)
    }
}
