// Turns loaded settings into the objects the rest of the crate runs on.

use std::time::Duration;

use anyhow::Result;

use crate::models::settings::AlbumSettings;
use crate::models::theme::AlbumTheme;
use crate::services::color::{
    BackgroundTint, ColorCache, DominantColorSampler, HttpImageSource, SamplerConfig,
};
use crate::services::countdown::{CountdownCalculator, CountdownTicker};

impl AlbumSettings {
    pub fn resolved_theme(&self) -> AlbumTheme {
        self.theme.theme()
    }

    pub fn countdown_calculator(&self) -> CountdownCalculator {
        CountdownCalculator::with_max_days(self.countdown.max_days)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.countdown.tick_millis)
    }

    /// Start a ticker for the configured anniversary. Needs a Tokio runtime.
    pub fn start_ticker(&self) -> CountdownTicker {
        CountdownTicker::start(
            self.anniversary.clone(),
            self.countdown_calculator(),
            self.tick_period(),
        )
    }

    /// Sampler tuning; the fallback defaults to the theme's page background.
    pub fn sampler_config(&self) -> SamplerConfig {
        let fallback = self
            .sampler
            .fallback_color
            .unwrap_or_else(|| self.resolved_theme().palette.page_background);

        SamplerConfig {
            timeout: Duration::from_millis(self.sampler.timeout_ms),
            raster_size: self.sampler.raster_size,
            fallback,
            placeholder_markers: self.sampler.placeholder_markers.clone(),
        }
    }

    pub fn color_sampler(&self) -> Result<DominantColorSampler<HttpImageSource>> {
        let source = HttpImageSource::with_options(
            self.sampler.base_url.as_deref(),
            self.sampler.max_image_bytes,
        )?;
        Ok(DominantColorSampler::new(source, self.sampler_config()))
    }

    /// Tint for the cover image at `url`. Never fails: when no sampler can be
    /// built the fallback colour is used.
    pub async fn cover_tint(&self, url: &str, cache: &ColorCache) -> BackgroundTint {
        match self.color_sampler() {
            Ok(sampler) => BackgroundTint::from_sample(cache.get_or_estimate(&sampler, url).await),
            Err(err) => {
                log::warn!("Colour sampling unavailable, using fallback: {:#}", err);
                BackgroundTint::from_sample(self.sampler_config().fallback)
            }
        }
    }
}
