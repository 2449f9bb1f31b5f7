//! Text colours that stay legible on top of a sampled cover colour.
//!
//! The sampled colour is used as-is for the background; only the foreground
//! is derived from it.

use crate::models::color::ColorSample;

const LIGHT_TEXT: ColorSample = ColorSample::new(255, 255, 255);
const DARK_TEXT: ColorSample = ColorSample::new(45, 30, 35);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundTint {
    pub background: ColorSample,
    pub text: ColorSample,
    /// Secondary text: the main text colour pulled towards the background.
    pub muted_text: ColorSample,
}

impl BackgroundTint {
    pub fn from_sample(sample: ColorSample) -> Self {
        let text = readable_text_color(sample);
        Self {
            background: sample,
            text,
            muted_text: mix_colors(text, sample, 0.35),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.text == LIGHT_TEXT
    }
}

pub fn readable_text_color(bg: ColorSample) -> ColorSample {
    if relative_luminance(bg) > 0.5 {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}

fn mix_colors(base: ColorSample, target: ColorSample, factor: f32) -> ColorSample {
    let weight = factor.clamp(0.0, 1.0);
    let mix = |start: u8, end: u8| -> u8 {
        let start_f = start as f32;
        let end_f = end as f32;
        ((start_f + (end_f - start_f) * weight).round()).clamp(0.0, 255.0) as u8
    };
    ColorSample::new(mix(base.r, target.r), mix(base.g, target.g), mix(base.b, target.b))
}

/// WCAG relative luminance in `0.0..=1.0`.
pub fn relative_luminance(color: ColorSample) -> f32 {
    fn srgb_component(value: u8) -> f32 {
        let channel = value as f32 / 255.0;
        if channel <= 0.03928 {
            channel / 12.92
        } else {
            ((channel + 0.055) / 1.055).powf(2.4)
        }
    }

    let r = srgb_component(color.r);
    let g = srgb_component(color.g);
    let b = srgb_component(color.b);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}
