//! Generation chains.
//!
//! A chain binds a [`PromptTemplate`] to a [`TextGenerator`] and runs four
//! stages per call: normalize the caller's input into bindings, render the
//! template, call the backend, then extract plain text from the response.

use crate::{Bindings, PromptTemplate};
use derive_getters::Getters;
use taleweaver_core::{GenerateRequest, GenerateResponse, PromptMessage};
use taleweaver_error::{BackendError, BackendErrorKind, TaleweaverResult};
use taleweaver_interface::TextGenerator;
use tracing::{debug, instrument};

/// Per-chain overrides for the generation request.
///
/// Unset fields fall back to the backend's own defaults.
#[derive(Debug, Clone, Default, PartialEq, Getters, derive_builder::Builder)]
#[builder(setter(into, strip_option), default)]
pub struct GenerationOptions {
    /// Model override
    model: Option<String>,
    /// Sampling temperature override
    temperature: Option<f32>,
    /// Output length cap
    max_tokens: Option<u32>,
}

impl GenerationOptions {
    /// Builder with every field unset.
    pub fn builder() -> GenerationOptionsBuilder {
        GenerationOptionsBuilder::default()
    }
}

/// A template bound to a text backend, with one input left open.
///
/// # Examples
///
/// ```rust,ignore
/// let template = PromptTemplate::single("Summarize: {text}")?;
/// let chain = Chain::new("summary", template, client, "text");
/// let summary = chain.invoke("A long story...").await?;
/// ```
#[derive(Debug, Clone)]
pub struct Chain<G: TextGenerator> {
    name: String,
    template: PromptTemplate,
    generator: G,
    input_key: String,
    options: GenerationOptions,
}

impl<G: TextGenerator> Chain<G> {
    /// Chain whose `invoke` input fills the `input_key` placeholder.
    pub fn new(
        name: impl Into<String>,
        template: PromptTemplate,
        generator: G,
        input_key: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            template,
            generator,
            input_key: input_key.into(),
            options: GenerationOptions::default(),
        }
    }

    /// Replace the generation overrides.
    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    /// Fix more placeholders on the underlying template.
    pub fn partial(mut self, bindings: &Bindings) -> TaleweaverResult<Self> {
        self.template = self.template.partial(bindings)?;
        Ok(self)
    }

    /// Chain name used in logs.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bound template.
    pub fn template(&self) -> &PromptTemplate {
        &self.template
    }

    /// Placeholder filled by `invoke`.
    pub fn input_key(&self) -> &str {
        &self.input_key
    }

    /// Generation overrides.
    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Messages `invoke(input)` would send, without calling the backend.
    pub fn render(&self, input: impl Into<String>) -> TaleweaverResult<Vec<PromptMessage>> {
        let bindings = normalize(&self.input_key, input.into());
        Ok(self.template.render(&bindings)?)
    }

    /// Run the chain with `input` as the open placeholder's value.
    pub async fn invoke(&self, input: impl Into<String>) -> TaleweaverResult<String> {
        let bindings = normalize(&self.input_key, input.into());
        self.invoke_with(&bindings).await
    }

    /// Run the chain with explicit bindings for every open placeholder.
    #[instrument(skip(self, bindings), fields(chain = %self.name, provider = self.generator.provider_name()))]
    pub async fn invoke_with(&self, bindings: &Bindings) -> TaleweaverResult<String> {
        let messages = self.template.render(bindings)?;
        debug!(message_count = messages.len(), "Rendered prompt");

        let request = build_request(messages, &self.options)?;
        let response = self.generator.generate(&request).await?;

        let text = extract(response);
        debug!(output_len = text.len(), "Chain completed");
        Ok(text)
    }

    /// Synchronous `invoke` on a private current-thread runtime.
    ///
    /// Returns a `Runtime` error when called from inside an async runtime;
    /// async callers use [`Chain::invoke`].
    pub fn invoke_blocking(&self, input: impl Into<String>) -> TaleweaverResult<String> {
        if tokio::runtime::Handle::try_current().is_ok() {
            return Err(BackendError::new(BackendErrorKind::Runtime(
                "invoke_blocking called inside an async runtime".to_string(),
            ))
            .into());
        }
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| {
                BackendError::new(BackendErrorKind::Runtime(format!(
                    "Failed to start runtime: {}",
                    e
                )))
            })?;
        runtime.block_on(self.invoke(input))
    }
}

fn normalize(input_key: &str, input: String) -> Bindings {
    Bindings::new().with(input_key, input)
}

fn build_request(
    messages: Vec<PromptMessage>,
    options: &GenerationOptions,
) -> Result<GenerateRequest, BackendError> {
    GenerateRequest::builder()
        .messages(messages)
        .model(options.model().clone())
        .max_tokens(*options.max_tokens())
        .temperature(*options.temperature())
        .build()
        .map_err(|e| BackendError::new(BackendErrorKind::InvalidRequest(e.to_string())))
}

fn extract(response: GenerateResponse) -> String {
    response.into_text()
}
