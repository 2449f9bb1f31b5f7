// Settings module
// One explicit settings object, loaded once and handed to whatever needs it.

use reqwest::Url;
use serde::{Deserialize, Serialize};

use super::color::ColorSample;
use super::countdown::DEFAULT_MAX_COUNTDOWN_DAYS;
use super::theme::ThemePreset;

pub const DEFAULT_TICK_MILLIS: u64 = 1_000;
pub const DEFAULT_SAMPLE_TIMEOUT_MS: u64 = 300;
pub const DEFAULT_RASTER_SIZE: u32 = 10;
/// Largest raster the sampler will resize into.
pub const MAX_RASTER_SIZE: u32 = 256;
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;
pub const DEFAULT_PLACEHOLDER_MARKER: &str = "placeholder";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountdownSettings {
    /// Countdowns longer than this many days are treated as misconfigured.
    pub max_days: u32,
    pub tick_millis: u64,
}

impl Default for CountdownSettings {
    fn default() -> Self {
        Self {
            max_days: DEFAULT_MAX_COUNTDOWN_DAYS,
            tick_millis: DEFAULT_TICK_MILLIS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerSettings {
    pub timeout_ms: u64,
    pub raster_size: u32,
    /// When unset, the theme's page background is used.
    pub fallback_color: Option<ColorSample>,
    pub placeholder_markers: Vec<String>,
    /// Base for relative image paths such as `/storage/covers/1.jpg`.
    pub base_url: Option<String>,
    pub max_image_bytes: usize,
}

impl Default for SamplerSettings {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_SAMPLE_TIMEOUT_MS,
            raster_size: DEFAULT_RASTER_SIZE,
            fallback_color: None,
            placeholder_markers: vec![DEFAULT_PLACEHOLDER_MARKER.to_string()],
            base_url: None,
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AlbumSettings {
    pub theme: ThemePreset,
    /// Whether the front-page "book" has been opened this session.
    pub book_opened: bool,
    /// Anniversary as `YYYY-MM-DD`. Unset means the countdown is not configured.
    pub anniversary: Option<String>,
    pub cover_image_url: Option<String>,
    pub countdown: CountdownSettings,
    pub sampler: SamplerSettings,
}

impl AlbumSettings {
    /// Validate settings values
    pub fn validate(&self) -> Result<(), String> {
        if self.countdown.max_days == 0 {
            return Err("countdown.max_days must be greater than zero".to_string());
        }

        if self.countdown.tick_millis == 0 {
            return Err("countdown.tick_millis must be greater than zero".to_string());
        }

        if self.sampler.raster_size == 0 {
            return Err("sampler.raster_size must be greater than zero".to_string());
        }

        if self.sampler.raster_size > MAX_RASTER_SIZE {
            return Err(format!(
                "sampler.raster_size must be at most {}",
                MAX_RASTER_SIZE
            ));
        }

        if self.sampler.max_image_bytes == 0 {
            return Err("sampler.max_image_bytes must be greater than zero".to_string());
        }

        if let Some(base_url) = &self.sampler.base_url {
            Url::parse(base_url)
                .map_err(|e| format!("sampler.base_url '{}' is not a valid URL: {}", base_url, e))?;
        }

        Ok(())
    }
}
