//! Test utilities for image backend tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use taleweaver_error::{ImageError, ImageErrorKind};
use taleweaver_interface::{ImageGenerationRequest, ImageTransport, TransportResponse};

/// What the stub answers with.
#[derive(Debug, Clone)]
pub enum StubReply {
    /// Answer with this status and body
    Respond(u16, Vec<u8>),
    /// Fail before any response arrives
    Unreachable(String),
}

/// A request the stub received.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub request: ImageGenerationRequest,
    pub api_key: String,
}

/// Image transport that never touches the network.
#[derive(Clone)]
pub struct StubImageTransport {
    reply: StubReply,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl StubImageTransport {
    /// Stub answering every request with `status` and `body`.
    pub fn responding(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            reply: StubReply::Respond(status, body.into()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Stub failing every request at the transport level.
    pub fn unreachable(message: &str) -> Self {
        Self {
            reply: StubReply::Unreachable(message.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of requests received.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Requests received so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageTransport for StubImageTransport {
    async fn send(
        &self,
        request: &ImageGenerationRequest,
        api_key: &str,
    ) -> Result<TransportResponse, ImageError> {
        self.calls.lock().unwrap().push(RecordedCall {
            request: request.clone(),
            api_key: api_key.to_string(),
        });

        match &self.reply {
            StubReply::Respond(status, body) => Ok(TransportResponse::new(*status, body.clone())),
            StubReply::Unreachable(message) => {
                Err(ImageError::new(ImageErrorKind::Http(message.clone())))
            }
        }
    }
}
