//! The three story operations behind one handle.

use crate::{Chain, Illustration, Illustrator, continue_story_chain, start_story_chain};
use derive_getters::Getters;
use std::sync::Arc;
use taleweaver_core::{
    Delimiter, ImageOutcome, StoryInput, StoryResponse, Theme, default_themes, pick_theme,
};
use taleweaver_error::TaleweaverResult;
use taleweaver_interface::{ImageTransport, TextGenerator};
use taleweaver_models::ImageGateway;
use tracing::{debug, info, instrument};

/// Story settings shared by every call.
#[derive(Debug, Clone, PartialEq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct StorytellerConfig {
    /// Fence marker around caller-supplied text
    #[builder(default)]
    delimiter: Delimiter,
    /// Themes drawn from when the caller gives none
    #[builder(default = "default_themes()")]
    themes: Vec<Theme>,
}

impl StorytellerConfig {
    /// Settings with an explicit delimiter and theme list.
    pub fn new(delimiter: Delimiter, themes: Vec<Theme>) -> Self {
        Self { delimiter, themes }
    }

    /// Builder seeded with the defaults.
    pub fn builder() -> StorytellerConfigBuilder {
        StorytellerConfigBuilder::default()
    }
}

impl Default for StorytellerConfig {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::default(),
            themes: default_themes(),
        }
    }
}

/// Starts, continues and illustrates stories.
///
/// Holds no per-story state: callers keep the story text and pass it back
/// on every turn.
///
/// # Examples
///
/// ```rust,ignore
/// let storyteller = Storyteller::new(client, gateway, StorytellerConfig::default())?;
/// let intro = storyteller.start_story(None).await?;
/// let next = storyteller.continue_story(&intro, "I open the door.").await?;
/// let picture = storyteller.illustrate(&next).await?;
/// ```
pub struct Storyteller<G: TextGenerator, T: ImageTransport> {
    generator: Arc<G>,
    start: Chain<Arc<G>>,
    illustrator: Illustrator<Arc<G>, T>,
    config: StorytellerConfig,
}

impl<G: TextGenerator, T: ImageTransport> Storyteller<G, T> {
    /// Wire a text backend and an image gateway together.
    pub fn new(
        generator: G,
        gateway: ImageGateway<T>,
        config: StorytellerConfig,
    ) -> TaleweaverResult<Self> {
        let generator = Arc::new(generator);
        let start = start_story_chain(Arc::clone(&generator), config.delimiter())?;
        let illustrator = Illustrator::new(Arc::clone(&generator), gateway, config.delimiter())?;

        Ok(Self {
            generator,
            start,
            illustrator,
            config,
        })
    }

    /// Shared settings.
    pub fn config(&self) -> &StorytellerConfig {
        &self.config
    }

    /// The text backend.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Open a story on a theme drawn from `themes`.
    ///
    /// `None` or an empty slice draws from the configured themes.
    pub async fn start_story(&self, themes: Option<&[Theme]>) -> TaleweaverResult<String> {
        let pool = match themes {
            Some(themes) if !themes.is_empty() => themes,
            _ => self.config.themes().as_slice(),
        };
        let theme = pick_theme(pool);
        debug!(theme = %theme, "Picked theme");
        self.start_story_with_theme(&theme).await
    }

    /// Open a story on `theme`.
    #[instrument(skip_all, fields(theme = %theme))]
    pub async fn start_story_with_theme(&self, theme: &Theme) -> TaleweaverResult<String> {
        let text = self.start.invoke(theme.as_str()).await?;
        info!(story_len = text.len(), "Story started");
        Ok(text)
    }

    /// Continue `story_context` with the reader's `user_input`.
    #[instrument(skip_all, fields(context_len = story_context.len(), input_len = user_input.len()))]
    pub async fn continue_story(
        &self,
        story_context: &str,
        user_input: &str,
    ) -> TaleweaverResult<String> {
        let chain = continue_story_chain(
            Arc::clone(&self.generator),
            story_context,
            self.config.delimiter(),
        )?;
        let text = chain.invoke(user_input).await?;
        info!(story_len = text.len(), "Story continued");
        Ok(text)
    }

    /// [`continue_story`](Self::continue_story) over request and response records.
    pub async fn continue_story_input(
        &self,
        input: &StoryInput,
    ) -> TaleweaverResult<StoryResponse> {
        self.continue_story(&input.story_context, &input.user_input)
            .await
            .map(StoryResponse::from)
    }

    /// Render an image for `text`.
    pub async fn illustrate(&self, text: &str) -> TaleweaverResult<ImageOutcome> {
        self.illustrator.illustrate(text).await
    }

    /// Render an image for `text`, keeping the generated prompt.
    pub async fn illustrate_detailed(&self, text: &str) -> TaleweaverResult<Illustration> {
        self.illustrator.illustrate_detailed(text).await
    }
}

impl<G: TextGenerator, T: ImageTransport> std::fmt::Debug for Storyteller<G, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storyteller")
            .field("provider", &self.generator.provider_name())
            .field("model", &self.generator.model_name())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
