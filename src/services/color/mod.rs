//! Cover-image colour estimation.
//!
//! Every entry point here resolves to a colour. Failures of any kind
//! (network, decode, timeout) collapse to the configured fallback.

mod cache;
mod palette;
mod sampler;
mod source;

pub use cache::ColorCache;
pub use palette::{readable_text_color, relative_luminance, BackgroundTint};
pub use sampler::{
    estimate_dominant_color, sample_image, sample_image_bytes, DominantColorSampler,
    SamplerConfig,
};
pub use source::{HttpImageSource, ImageSource};
