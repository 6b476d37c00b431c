//! Chain that turns narrative text into an image-model prompt.

use crate::prompts::{DELIMITER_KEY, IMAGE_PROMPT, INPUT_TEXT_KEY};
use crate::{Bindings, Chain, PromptTemplate};
use taleweaver_core::{Delimiter, PromptMessage};
use taleweaver_error::TaleweaverResult;
use taleweaver_interface::TextGenerator;
use tracing::debug;

const PROMPT_LABEL: &str = "prompt:";

/// Template for the image prompt: a single message needing `delimiter` and `input_text`.
pub fn image_prompt_template() -> TaleweaverResult<PromptTemplate> {
    Ok(PromptTemplate::single(IMAGE_PROMPT)?)
}

/// Tidy a model-written image prompt.
///
/// Trims whitespace, then removes an echoed delimiter fence, a leading
/// `Prompt:` label and one layer of wrapping double quotes. Falls back to the
/// trimmed text if cleaning would leave nothing.
///
/// # Examples
///
/// ```
/// use taleweaver_core::Delimiter;
/// use taleweaver_narrative::clean_image_prompt;
///
/// let fence = Delimiter::default();
/// assert_eq!(
///     clean_image_prompt("```Prompt: \"A misty harbor, hyper realistic\"```\n", &fence),
///     "A misty harbor, hyper realistic"
/// );
/// assert_eq!(clean_image_prompt("  A red door  ", &fence), "A red door");
/// ```
pub fn clean_image_prompt(raw: &str, delimiter: &Delimiter) -> String {
    let trimmed = raw.trim();

    let mut text = delimiter.unwrap_from(trimmed).trim();

    let labelled = text
        .get(..PROMPT_LABEL.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(PROMPT_LABEL));
    if labelled {
        text = text[PROMPT_LABEL.len()..].trim_start();
    }

    let candidate = text;
    let quoted = [('"', '"'), ('\u{201c}', '\u{201d}')]
        .into_iter()
        .filter(move |(open, close)| candidate.len() >= open.len_utf8() + close.len_utf8())
        .find_map(move |(open, close)| candidate.strip_prefix(open)?.strip_suffix(close));
    if let Some(inner) = quoted {
        text = inner.trim();
    }

    if text.is_empty() {
        trimmed.to_string()
    } else {
        text.to_string()
    }
}

/// Image-prompt chain with output cleaning.
#[derive(Debug, Clone)]
pub struct ImagePromptChain<G: TextGenerator> {
    chain: Chain<G>,
    delimiter: Delimiter,
}

impl<G: TextGenerator> ImagePromptChain<G> {
    /// Bind the template to `generator` with `delimiter` fixed.
    pub fn new(generator: G, delimiter: &Delimiter) -> TaleweaverResult<Self> {
        let chain = Chain::new(
            "image_prompt",
            image_prompt_template()?,
            generator,
            INPUT_TEXT_KEY,
        )
        .partial(&Bindings::new().with(DELIMITER_KEY, delimiter.as_str()))?;

        Ok(Self {
            chain,
            delimiter: delimiter.clone(),
        })
    }

    /// The underlying chain.
    pub fn chain(&self) -> &Chain<G> {
        &self.chain
    }

    /// Messages sent for `input_text`.
    pub fn render(&self, input_text: impl Into<String>) -> TaleweaverResult<Vec<PromptMessage>> {
        self.chain.render(input_text)
    }

    /// Generate and clean an image prompt for `input_text`.
    pub async fn invoke(&self, input_text: impl Into<String>) -> TaleweaverResult<String> {
        let raw = self.chain.invoke(input_text).await?;
        let prompt = clean_image_prompt(&raw, &self.delimiter);
        debug!(raw_len = raw.len(), prompt_len = prompt.len(), "Cleaned image prompt");
        Ok(prompt)
    }

    /// Blocking form of [`invoke`](Self::invoke).
    pub fn invoke_blocking(&self, input_text: impl Into<String>) -> TaleweaverResult<String> {
        let raw = self.chain.invoke_blocking(input_text)?;
        Ok(clean_image_prompt(&raw, &self.delimiter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fence() -> Delimiter {
        Delimiter::default()
    }

    #[test]
    fn test_plain_prompt_is_untouched() {
        let prompt = "A neon-lit alley in the rain, hyper realistic";
        assert_eq!(clean_image_prompt(prompt, &fence()), prompt);
    }

    #[test]
    fn test_label_is_case_insensitive() {
        assert_eq!(
            clean_image_prompt("PROMPT:   a lone tree", &fence()),
            "a lone tree"
        );
    }

    #[test]
    fn test_curly_quotes_are_removed() {
        assert_eq!(
            clean_image_prompt("\u{201c}a lone tree\u{201d}", &fence()),
            "a lone tree"
        );
    }

    #[test]
    fn test_inner_quotes_are_kept() {
        assert_eq!(
            clean_image_prompt("a sign reading \"OPEN\"", &fence()),
            "a sign reading \"OPEN\""
        );
    }

    #[test]
    fn test_nothing_left_falls_back_to_trimmed() {
        assert_eq!(clean_image_prompt("  \"\"  ", &fence()), "\"\"");
        assert_eq!(clean_image_prompt("", &fence()), "");
    }

    #[test]
    fn test_custom_delimiter_is_stripped() {
        let delimiter = Delimiter::new("###");
        assert_eq!(
            clean_image_prompt("###a castle at dawn###", &delimiter),
            "a castle at dawn"
        );
    }
}
