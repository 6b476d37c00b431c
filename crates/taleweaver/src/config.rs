//! Layered application configuration.
//!
//! Sources, later overriding earlier:
//! - Bundled defaults (include_str! from taleweaver.toml)
//! - ~/.config/taleweaver/taleweaver.toml
//! - ./taleweaver.toml
//! - `TALEWEAVER__SECTION__KEY` environment variables
//!
//! Credentials are not configuration: they come from `OPENAI_API_KEY` and
//! `STABILITY_API_KEY` only.

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};
use std::path::Path;
use taleweaver_core::{Delimiter, Theme, default_themes};
use taleweaver_error::{ConfigError, TaleweaverResult};
use taleweaver_models::{API_HOST_VAR, OpenAiConfig, StabilityConfig};
use taleweaver_narrative::StorytellerConfig;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../taleweaver.toml");
const ENV_PREFIX: &str = "TALEWEAVER";

/// Text backend settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TextConfig {
    /// Base URL of the OpenAI-compatible service
    pub base_url: String,
    /// Chat model identifier
    pub model: String,
    /// Default sampling temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Default completion length cap
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o".to_string(),
            temperature: None,
            max_tokens: None,
        }
    }
}

/// Image backend settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImageConfig {
    /// Scheme and host of the image service
    pub api_host: String,
    /// Engine used for generation
    pub engine_id: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        let defaults = StabilityConfig::default();
        Self {
            api_host: defaults.api_host().clone(),
            engine_id: defaults.engine_id().clone(),
        }
    }
}

/// Story settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StoryConfig {
    /// Fence marker around caller-supplied text
    #[serde(default)]
    pub delimiter: Delimiter,
    /// Themes drawn from when none are given
    #[serde(default = "default_themes")]
    pub themes: Vec<Theme>,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::default(),
            themes: default_themes(),
        }
    }
}

/// Top-level Taleweaver configuration.
///
/// # Example
///
/// ```no_run
/// use taleweaver::TaleweaverConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = TaleweaverConfig::load()?;
/// println!("Text model: {}", config.text.model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct TaleweaverConfig {
    /// Text backend settings
    #[serde(default)]
    pub text: TextConfig,
    /// Image backend settings
    #[serde(default)]
    pub image: ImageConfig,
    /// Story settings
    #[serde(default)]
    pub story: StoryConfig,
}

impl TaleweaverConfig {
    /// Load configuration with precedence: env > current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> TaleweaverResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        let mut builder = Self::defaults();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/taleweaver/taleweaver.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("taleweaver").required(false));

        Self::finish(builder.add_source(Self::environment()))
    }

    /// Bundled defaults overlaid with one specific file and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or cannot be parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> TaleweaverResult<Self> {
        debug!("Loading configuration from file");

        let builder = Self::defaults()
            .add_source(File::from(path.as_ref()).required(true))
            .add_source(Self::environment());
        Self::finish(builder)
    }

    /// Bundled defaults overlaid with TOML text.
    pub fn from_toml_str(toml: &str) -> TaleweaverResult<Self> {
        Self::finish(Self::defaults().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn defaults() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> TaleweaverResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;
        debug!(model = %config.text.model, engine = %config.image.engine_id, "Configuration loaded");
        Ok(config)
    }

    /// Text backend settings with the given credential.
    pub fn openai_config(&self, api_key: impl Into<String>) -> TaleweaverResult<OpenAiConfig> {
        Ok(OpenAiConfig::builder()
            .base_url(self.text.base_url.clone())
            .model(self.text.model.clone())
            .api_key(api_key)
            .temperature(self.text.temperature)
            .max_tokens(self.text.max_tokens)
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid text backend configuration: {}", e)))?)
    }

    /// Image endpoint settings, with `API_HOST` taking precedence over the file.
    pub fn stability_config(&self) -> TaleweaverResult<StabilityConfig> {
        self.stability_config_with_host(std::env::var(API_HOST_VAR).ok())
    }

    /// Image endpoint settings with an explicit host override.
    pub fn stability_config_with_host(
        &self,
        host: Option<String>,
    ) -> TaleweaverResult<StabilityConfig> {
        Ok(StabilityConfig::builder()
            .api_host(host.unwrap_or_else(|| self.image.api_host.clone()))
            .engine_id(self.image.engine_id.clone())
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid image backend configuration: {}", e)))?)
    }

    /// Story settings for the storyteller.
    pub fn storyteller_config(&self) -> StorytellerConfig {
        StorytellerConfig::new(self.story.delimiter.clone(), self.story.themes.clone())
    }
}
