use std::time::Duration;

use anyhow::{bail, Context, Result};
use image::imageops::FilterType;
use image::DynamicImage;

use super::source::{HttpImageSource, ImageSource};
use crate::models::color::{ColorSample, DEFAULT_FALLBACK_COLOR};
use crate::models::settings::{
    DEFAULT_PLACEHOLDER_MARKER, DEFAULT_RASTER_SIZE, DEFAULT_SAMPLE_TIMEOUT_MS, MAX_RASTER_SIZE,
};

/// Tuning for [`DominantColorSampler`].
#[derive(Debug, Clone, PartialEq)]
pub struct SamplerConfig {
    pub timeout: Duration,
    /// Side length of the square raster the image is shrunk into.
    pub raster_size: u32,
    pub fallback: ColorSample,
    /// URLs containing any of these (case-insensitive) are treated as
    /// placeholders and never fetched.
    pub placeholder_markers: Vec<String>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_SAMPLE_TIMEOUT_MS),
            raster_size: DEFAULT_RASTER_SIZE,
            fallback: DEFAULT_FALLBACK_COLOR,
            placeholder_markers: vec![DEFAULT_PLACEHOLDER_MARKER.to_string()],
        }
    }
}

impl SamplerConfig {
    pub fn is_placeholder(&self, url: &str) -> bool {
        let url = url.trim();
        if url.is_empty() {
            return true;
        }

        let lowered = url.to_lowercase();
        self.placeholder_markers
            .iter()
            .filter(|marker| !marker.is_empty())
            .any(|marker| lowered.contains(&marker.to_lowercase()))
    }
}

/// Estimates a representative colour for an image, bounded by a timeout.
pub struct DominantColorSampler<S = HttpImageSource> {
    source: S,
    config: SamplerConfig,
}

impl<S: ImageSource> DominantColorSampler<S> {
    pub fn new(source: S, config: SamplerConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    pub fn fallback(&self) -> ColorSample {
        self.config.fallback
    }

    /// Colour for `url` using the configured timeout. Never fails.
    pub async fn estimate(&self, url: &str) -> ColorSample {
        self.estimate_with_timeout(url, self.config.timeout).await
    }

    pub async fn estimate_with_timeout(&self, url: &str, timeout: Duration) -> ColorSample {
        self.try_estimate(url, timeout)
            .await
            .unwrap_or(self.config.fallback)
    }

    /// Like [`estimate_with_timeout`](Self::estimate_with_timeout) but returns
    /// `None` where the fallback would be used, so callers can tell a real
    /// sample from a default.
    pub async fn try_estimate(&self, url: &str, timeout: Duration) -> Option<ColorSample> {
        if self.config.is_placeholder(url) {
            log::debug!("Skipping colour sampling for placeholder image '{}'", url);
            return None;
        }

        let raster_size = self.config.raster_size;
        let work = async {
            let bytes = self.source.fetch(url).await?;
            // Decoding is CPU-bound; if the timeout wins, the worker finishes
            // on its own and its result is dropped.
            let color = tokio::task::spawn_blocking(move || sample_image_bytes(&bytes, raster_size))
                .await
                .context("Colour sampling worker failed")??;
            Ok::<ColorSample, anyhow::Error>(color)
        };

        match tokio::time::timeout(timeout, work).await {
            Ok(Ok(color)) => Some(color),
            Ok(Err(err)) => {
                log::debug!("Colour sampling failed for '{}': {:#}", url, err);
                None
            }
            Err(_) => {
                log::debug!("Colour sampling for '{}' timed out after {:?}", url, timeout);
                None
            }
        }
    }
}

/// One-shot estimate over HTTP with default settings and the given timeout.
pub async fn estimate_dominant_color(image_url: &str, timeout_ms: u64) -> ColorSample {
    let config = SamplerConfig {
        timeout: Duration::from_millis(timeout_ms),
        ..SamplerConfig::default()
    };

    if config.is_placeholder(image_url) {
        return config.fallback;
    }

    match HttpImageSource::new() {
        Ok(source) => DominantColorSampler::new(source, config).estimate(image_url).await,
        Err(err) => {
            log::warn!("Image fetching unavailable: {:#}", err);
            config.fallback
        }
    }
}

/// Decode `bytes` and sample them. See [`sample_image`].
pub fn sample_image_bytes(bytes: &[u8], raster_size: u32) -> Result<ColorSample> {
    let image = image::load_from_memory(bytes).context("Failed to decode image")?;
    if image.width() == 0 || image.height() == 0 {
        bail!("Image has no pixels");
    }
    Ok(sample_image(&image, raster_size))
}

/// Shrink `image` into a `raster_size` square and average the four corner
/// pixels and the centre pixel, channel by channel with floor division.
///
/// Alpha is ignored. `raster_size` is clamped to `1..=MAX_RASTER_SIZE`.
pub fn sample_image(image: &DynamicImage, raster_size: u32) -> ColorSample {
    let size = raster_size.clamp(1, MAX_RASTER_SIZE);
    let raster = image::imageops::resize(&image.to_rgb8(), size, size, FilterType::Triangle);

    let last = size - 1;
    let mid = size / 2;
    let points = [(0, 0), (last, 0), (0, last), (last, last), (mid, mid)];

    let mut sums = [0u32; 3];
    for (x, y) in points {
        let pixel = raster.get_pixel(x, y);
        for (sum, channel) in sums.iter_mut().zip(pixel.0) {
            *sum += u32::from(channel);
        }
    }

    let count = points.len() as u32;
    ColorSample::new(
        (sums[0] / count) as u8,
        (sums[1] / count) as u8,
        (sums[2] / count) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn solid_image_samples_to_itself() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(64, 48, Rgb([200, 40, 90])));
        let color = sample_image(&image, 10);
        assert!(color.max_channel_distance(&ColorSample::new(200, 40, 90)) <= 1, "{color}");
    }

    #[test]
    fn averages_corners_and_centre_with_floor() {
        // Already 10x10, so the resize leaves pixels untouched.
        let mut image = RgbImage::from_pixel(10, 10, Rgb([0, 0, 0]));
        image.put_pixel(0, 0, Rgb([255, 0, 0]));
        image.put_pixel(9, 0, Rgb([255, 0, 0]));
        image.put_pixel(5, 5, Rgb([0, 0, 7]));

        let color = sample_image(&DynamicImage::ImageRgb8(image), 10);
        assert_eq!(color, ColorSample::new(102, 0, 1));
    }

    #[test]
    fn single_pixel_raster_is_supported() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(3, 3, Rgb([10, 20, 30])));
        let color = sample_image(&image, 0);
        assert!(color.max_channel_distance(&ColorSample::new(10, 20, 30)) <= 1, "{color}");
    }

    #[test]
    fn huge_raster_is_clamped() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_fn(8, 8, |x, _| {
            if x < 4 {
                Rgb([0, 0, 0])
            } else {
                Rgb([200, 200, 200])
            }
        }));

        let color = sample_image(&image, u32::MAX);
        assert_eq!(color, sample_image(&image, MAX_RASTER_SIZE));
    }

    #[test]
    fn garbage_bytes_are_an_error() {
        assert!(sample_image_bytes(b"definitely not an image", 10).is_err());
        assert!(sample_image_bytes(&[], 10).is_err());
    }

    #[test]
    fn placeholder_detection() {
        let config = SamplerConfig::default();
        assert!(config.is_placeholder(""));
        assert!(config.is_placeholder("   "));
        assert!(config.is_placeholder("/images/Placeholder.svg"));
        assert!(!config.is_placeholder("https://cdn.example.com/cover.jpg"));
    }

    #[test]
    fn empty_markers_never_match() {
        let config = SamplerConfig {
            placeholder_markers: vec![String::new()],
            ..SamplerConfig::default()
        };
        assert!(!config.is_placeholder("https://cdn.example.com/cover.jpg"));
    }
}
