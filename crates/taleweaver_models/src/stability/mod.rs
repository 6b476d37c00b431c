//! Stability-style text-to-image backend and the image rendering gateway.

mod gateway;
mod transport;

pub use gateway::{
    CFG_SCALE, HEIGHT, ImageGateway, SAMPLES, STABILITY_API_KEY_VAR, STEPS, WIDTH, image_request,
};
pub use transport::{API_HOST_VAR, StabilityConfig, StabilityConfigBuilder, StabilityTransport};
