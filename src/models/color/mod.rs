// Colour value objects shared by the sampler, themes and settings

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque RGB colour. Serialized as a `#rrggbb` string so it reads
/// naturally in settings files and cache snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorSample {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSample {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb`. Returns `None` for anything else.
    pub fn from_hex_str(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(ColorSample::new(r, g, b))
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Largest per-channel difference, handy for "close enough" comparisons
    /// of lossy images.
    pub fn max_channel_distance(&self, other: &ColorSample) -> u8 {
        self.r
            .abs_diff(other.r)
            .max(self.g.abs_diff(other.g))
            .max(self.b.abs_diff(other.b))
    }
}

/// Background used when no cover colour can be determined.
pub const DEFAULT_FALLBACK_COLOR: ColorSample = ColorSample::new(0xFF, 0xFB, 0xF0);

impl Default for ColorSample {
    fn default() -> Self {
        DEFAULT_FALLBACK_COLOR
    }
}

impl fmt::Display for ColorSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<ColorSample> for String {
    fn from(color: ColorSample) -> Self {
        color.to_hex()
    }
}

impl TryFrom<String> for ColorSample {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ColorSample::from_hex_str(&value).ok_or_else(|| format!("invalid hex colour '{}'", value))
    }
}
