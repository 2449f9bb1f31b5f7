//! URL-keyed memo of sampled colours.
//!
//! The cache is never authoritative: losing it only costs a re-sample.
//! Fallback colours are not stored so that a timed-out image gets another
//! chance on the next request.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use std::sync::{PoisonError, RwLock};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::sampler::DominantColorSampler;
use super::source::ImageSource;
use crate::models::color::ColorSample;

#[derive(Debug, Default, Serialize, Deserialize)]
struct CacheSnapshot {
    entries: BTreeMap<String, ColorSample>,
}

#[derive(Debug, Default)]
pub struct ColorCache {
    entries: RwLock<HashMap<String, ColorSample>>,
}

impl ColorCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, url: &str) -> Option<ColorSample> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(url)
            .copied()
    }

    /// Last write wins.
    pub fn insert(&self, url: impl Into<String>, color: ColorSample) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(url.into(), color);
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Cached colour for `url`, sampling it on a miss.
    pub async fn get_or_estimate<S: ImageSource>(
        &self,
        sampler: &DominantColorSampler<S>,
        url: &str,
    ) -> ColorSample {
        if let Some(color) = self.get(url) {
            return color;
        }

        match sampler.try_estimate(url, sampler.config().timeout).await {
            Some(color) => {
                self.insert(url, color);
                color
            }
            None => sampler.fallback(),
        }
    }

    /// Load a snapshot written by [`save_snapshot`](Self::save_snapshot).
    /// A missing or unreadable file gives an empty cache.
    pub fn load_snapshot(path: &Path) -> Self {
        if !path.exists() {
            return Self::new();
        }

        let snapshot = fs::read_to_string(path)
            .with_context(|| format!("failed to read colour cache from {}", path.display()))
            .and_then(|data| {
                serde_json::from_str::<CacheSnapshot>(&data).with_context(|| {
                    format!("failed to deserialize colour cache from {}", path.display())
                })
            });

        match snapshot {
            Ok(snapshot) => {
                log::info!("Loaded {} cached cover colours", snapshot.entries.len());
                Self {
                    entries: RwLock::new(snapshot.entries.into_iter().collect()),
                }
            }
            Err(err) => {
                log::warn!("Ignoring colour cache: {:#}", err);
                Self::new()
            }
        }
    }

    pub fn save_snapshot(&self, path: &Path) -> Result<()> {
        let snapshot = CacheSnapshot {
            entries: self
                .entries
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .iter()
                .map(|(url, color)| (url.clone(), *color))
                .collect(),
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = serde_json::to_string_pretty(&snapshot)?;
        fs::write(path, data)
            .with_context(|| format!("failed to write colour cache to {}", path.display()))?;
        Ok(())
    }
}
