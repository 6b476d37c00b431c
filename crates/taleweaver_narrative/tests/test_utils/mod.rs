//! Test doubles for chain and storyteller tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use taleweaver_core::{GenerateRequest, GenerateResponse};
use taleweaver_error::{
    BackendError, BackendErrorKind, ImageError, ImageErrorKind, TaleweaverResult,
};
use taleweaver_interface::{
    ImageGenerationRequest, ImageTransport, TextGenerator, TransportResponse,
};

/// How the mock text backend answers.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always answer with this text
    Success(String),
    /// Answer with these texts in order, repeating the last
    Sequence(Vec<String>),
    /// Always fail with this error
    Error(BackendErrorKind),
}

/// Text backend that records every request it receives.
#[derive(Clone)]
pub struct MockTextGenerator {
    behavior: MockBehavior,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl MockTextGenerator {
    /// Mock that always answers with `text`.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Success(text.into()))
    }

    /// Mock that answers with `texts` in order.
    pub fn new_sequence<S: Into<String>>(texts: impl IntoIterator<Item = S>) -> Self {
        Self::with_behavior(MockBehavior::Sequence(
            texts.into_iter().map(Into::into).collect(),
        ))
    }

    /// Mock that always fails.
    pub fn new_error(kind: BackendErrorKind) -> Self {
        Self::with_behavior(MockBehavior::Error(kind))
    }

    fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of generate calls so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The most recent request.
    pub fn last_request(&self) -> GenerateRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request recorded")
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, req: &GenerateRequest) -> TaleweaverResult<GenerateResponse> {
        let index = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(req.clone());
            requests.len() - 1
        };

        match &self.behavior {
            MockBehavior::Success(text) => Ok(GenerateResponse::new(text.clone())),
            MockBehavior::Sequence(texts) => {
                let text = texts
                    .get(index)
                    .or_else(|| texts.last())
                    .cloned()
                    .unwrap_or_default();
                Ok(GenerateResponse::new(text))
            }
            MockBehavior::Error(kind) => Err(BackendError::new(kind.clone()).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// Image transport that never touches the network.
#[derive(Clone)]
pub struct StubImageTransport {
    status: u16,
    body: Vec<u8>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl StubImageTransport {
    /// Stub answering every request with `status` and `body`.
    pub fn responding(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of requests received.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// Prompt text of every request received.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageTransport for StubImageTransport {
    async fn send(
        &self,
        request: &ImageGenerationRequest,
        _api_key: &str,
    ) -> Result<TransportResponse, ImageError> {
        let prompt = request
            .text_prompts()
            .first()
            .map(|p| p.text.clone())
            .ok_or_else(|| ImageError::new(ImageErrorKind::Http("empty request".into())))?;
        self.prompts.lock().unwrap().push(prompt);
        Ok(TransportResponse::new(self.status, self.body.clone()))
    }
}
