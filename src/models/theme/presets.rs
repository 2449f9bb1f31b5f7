//! Built-in theme constructors for AlbumTheme.

use super::{AlbumTheme, ThemeCopy, ThemeDecorations, ThemePalette};
use crate::models::color::{ColorSample, DEFAULT_FALLBACK_COLOR};

const fn rgb(r: u8, g: u8, b: u8) -> ColorSample {
    ColorSample::new(r, g, b)
}

fn copy(heading: &str, prompt: &str, invalid: &str, letter: &str) -> ThemeCopy {
    ThemeCopy {
        countdown_heading: heading.to_string(),
        not_configured_prompt: prompt.to_string(),
        invalid_date_notice: invalid.to_string(),
        letter_heading: letter.to_string(),
    }
}

impl AlbumTheme {
    /// Soft cream and rose, the out-of-the-box look
    pub fn default_theme() -> Self {
        Self {
            name: "Default".to_string(),
            is_dark: false,
            palette: ThemePalette {
                page_background: DEFAULT_FALLBACK_COLOR,
                surface: rgb(255, 255, 255),
                accent: rgb(232, 93, 117),   // rose
                text_primary: rgb(74, 44, 52),
                text_secondary: rgb(140, 106, 115),
            },
            copy: copy(
                "Until our anniversary",
                "Set your anniversary date to start the countdown",
                "We couldn't read your anniversary date. Please check it in settings.",
                "A letter for you",
            ),
            decorations: ThemeDecorations {
                emoji: "💕".to_string(),
                particle_count: 12,
                sparkle: false,
            },
        }
    }

    /// Deep navy with moonlit silver
    pub fn midnight() -> Self {
        Self {
            name: "Midnight".to_string(),
            is_dark: true,
            palette: ThemePalette {
                page_background: rgb(15, 20, 45),
                surface: rgb(28, 35, 70),
                accent: rgb(170, 185, 255), // moonlight
                text_primary: rgb(232, 236, 255),
                text_secondary: rgb(150, 160, 200),
            },
            copy: copy(
                "Nights until our anniversary",
                "Pick a date under the stars to start the countdown",
                "That date got lost in the dark. Please check it in settings.",
                "Written by moonlight",
            ),
            decorations: ThemeDecorations {
                emoji: "🌙".to_string(),
                particle_count: 40,
                sparkle: true,
            },
        }
    }

    /// Black and gold
    pub fn classy() -> Self {
        Self {
            name: "Classy".to_string(),
            is_dark: true,
            palette: ThemePalette {
                page_background: rgb(20, 20, 20),
                surface: rgb(34, 32, 30),
                accent: rgb(212, 175, 55), // gold
                text_primary: rgb(245, 240, 230),
                text_secondary: rgb(180, 170, 150),
            },
            copy: copy(
                "Counting down to our anniversary",
                "Add your anniversary date to begin the countdown",
                "Your anniversary date appears to be invalid. Please review it in settings.",
                "With love",
            ),
            decorations: ThemeDecorations {
                emoji: "✨".to_string(),
                particle_count: 8,
                sparkle: true,
            },
        }
    }

    /// Sepia paper and ink
    pub fn vintage() -> Self {
        Self {
            name: "Vintage".to_string(),
            is_dark: false,
            palette: ThemePalette {
                page_background: rgb(244, 232, 208),
                surface: rgb(250, 243, 228),
                accent: rgb(139, 90, 43), // sepia
                text_primary: rgb(70, 50, 30),
                text_secondary: rgb(120, 95, 70),
            },
            copy: copy(
                "Days until our anniversary",
                "Write down your anniversary to start the countdown",
                "The ink on that date has smudged. Please check it in settings.",
                "My dearest",
            ),
            decorations: ThemeDecorations {
                emoji: "📜".to_string(),
                particle_count: 0,
                sparkle: false,
            },
        }
    }

    /// Leaf greens and bark
    pub fn nature() -> Self {
        Self {
            name: "Nature".to_string(),
            is_dark: false,
            palette: ThemePalette {
                page_background: rgb(238, 245, 233),
                surface: rgb(250, 253, 247),
                accent: rgb(76, 140, 74), // leaf
                text_primary: rgb(40, 62, 38),
                text_secondary: rgb(100, 125, 95),
            },
            copy: copy(
                "Seasons until our anniversary",
                "Plant your anniversary date to start the countdown",
                "That date didn't take root. Please check it in settings.",
                "Growing with you",
            ),
            decorations: ThemeDecorations {
                emoji: "🌿".to_string(),
                particle_count: 20,
                sparkle: false,
            },
        }
    }
}
