//! Backend traits.

use crate::{ImageGenerationRequest, TransportResponse};
use async_trait::async_trait;
use std::sync::Arc;
use taleweaver_core::{GenerateRequest, GenerateResponse};
use taleweaver_error::{ImageError, TaleweaverResult};

/// A text-generation backend.
///
/// Implementations issue exactly one network call per `generate` and never
/// retry; the await on that call is the only suspension point.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate the next turn for an ordered sequence of prompt messages.
    async fn generate(&self, req: &GenerateRequest) -> TaleweaverResult<GenerateResponse>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt-4o").
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for Arc<T> {
    async fn generate(&self, req: &GenerateRequest) -> TaleweaverResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

/// Raw HTTP exchange with a text-to-image service.
///
/// A transport only moves bytes: any status code the service answers with is
/// returned as a [`TransportResponse`]. Interpreting the status is the
/// gateway's job. `Err` is reserved for failures where no response arrived.
#[async_trait]
pub trait ImageTransport: Send + Sync {
    /// POST a generation request authenticated with `api_key`.
    async fn send(
        &self,
        request: &ImageGenerationRequest,
        api_key: &str,
    ) -> Result<TransportResponse, ImageError>;
}

#[async_trait]
impl<T: ImageTransport + ?Sized> ImageTransport for Arc<T> {
    async fn send(
        &self,
        request: &ImageGenerationRequest,
        api_key: &str,
    ) -> Result<TransportResponse, ImageError> {
        (**self).send(request, api_key).await
    }
}
