// Album themes as data
//
// Each skin is a record of colours, copy and decoration parameters consumed by
// a single renderer, rather than a separate layout per theme.

mod presets;

use serde::{Deserialize, Serialize};
use std::fmt;

use super::color::ColorSample;
use super::countdown::CountdownStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ThemePreset {
    #[default]
    Default,
    Midnight,
    Classy,
    Vintage,
    Nature,
}

impl ThemePreset {
    pub fn all() -> &'static [ThemePreset] {
        &[
            ThemePreset::Default,
            ThemePreset::Midnight,
            ThemePreset::Classy,
            ThemePreset::Vintage,
            ThemePreset::Nature,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemePreset::Default => "Default",
            ThemePreset::Midnight => "Midnight",
            ThemePreset::Classy => "Classy",
            ThemePreset::Vintage => "Vintage",
            ThemePreset::Nature => "Nature",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::all()
            .iter()
            .copied()
            .find(|preset| preset.name().eq_ignore_ascii_case(name))
    }

    pub fn theme(&self) -> AlbumTheme {
        match self {
            ThemePreset::Default => AlbumTheme::default_theme(),
            ThemePreset::Midnight => AlbumTheme::midnight(),
            ThemePreset::Classy => AlbumTheme::classy(),
            ThemePreset::Vintage => AlbumTheme::vintage(),
            ThemePreset::Nature => AlbumTheme::nature(),
        }
    }
}

impl fmt::Display for ThemePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<ThemePreset> for String {
    fn from(preset: ThemePreset) -> Self {
        preset.name().to_string()
    }
}

impl TryFrom<String> for ThemePreset {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ThemePreset::from_name(&value).ok_or_else(|| format!("unknown theme '{}'", value))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub page_background: ColorSample,
    pub surface: ColorSample,
    pub accent: ColorSample,
    pub text_primary: ColorSample,
    pub text_secondary: ColorSample,
}

/// User-facing strings that differ between themes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeCopy {
    pub countdown_heading: String,
    pub not_configured_prompt: String,
    pub invalid_date_notice: String,
    pub letter_heading: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeDecorations {
    pub emoji: String,
    /// Floating decorations drawn behind the front page.
    pub particle_count: u32,
    pub sparkle: bool,
}

impl ThemeDecorations {
    /// One row of floating decorations; with `sparkle`, every other particle
    /// is a sparkle. Empty when the theme has no particles.
    pub fn particle_line(&self) -> String {
        (0..self.particle_count)
            .map(|i| {
                if self.sparkle && i % 2 == 1 {
                    "✨"
                } else {
                    self.emoji.as_str()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumTheme {
    pub name: String,
    pub is_dark: bool,
    pub palette: ThemePalette,
    pub copy: ThemeCopy,
    pub decorations: ThemeDecorations,
}

impl AlbumTheme {
    /// Front page lines: the closed cover until the book has been opened,
    /// then the letter heading.
    pub fn front_page(&self, book_opened: bool) -> Vec<String> {
        let mut lines = Vec::new();
        let particles = self.decorations.particle_line();
        if !particles.is_empty() {
            lines.push(particles);
        }

        let emoji = &self.decorations.emoji;
        if book_opened {
            lines.push(format!("{} {}", emoji, self.copy.letter_heading));
        } else {
            lines.push(format!("{} {} album {}", emoji, self.name, emoji));
        }
        lines
    }

    /// The line a countdown display shows for `status`.
    pub fn countdown_message(&self, status: &CountdownStatus) -> String {
        match status {
            CountdownStatus::NotConfigured => self.copy.not_configured_prompt.clone(),
            CountdownStatus::Counting(remaining) => format!(
                "{} {}: {}",
                self.decorations.emoji, self.copy.countdown_heading, remaining
            ),
            CountdownStatus::Invalid(err) => {
                format!("{} ({})", self.copy.invalid_date_notice, err)
            }
        }
    }
}

impl Default for AlbumTheme {
    fn default() -> Self {
        Self::default_theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::color::DEFAULT_FALLBACK_COLOR;
    use crate::models::countdown::{CountdownError, TimeRemaining};

    #[test]
    fn every_preset_round_trips_by_name() {
        for preset in ThemePreset::all() {
            assert_eq!(ThemePreset::from_name(preset.name()), Some(*preset));
            assert_eq!(preset.theme().name, preset.name());
        }
        assert_eq!(ThemePreset::from_name("  midnight "), Some(ThemePreset::Midnight));
        assert_eq!(ThemePreset::from_name("neon"), None);
    }

    #[test]
    fn default_theme_uses_cream_background() {
        let theme = ThemePreset::Default.theme();
        assert_eq!(theme.palette.page_background, DEFAULT_FALLBACK_COLOR);
        assert!(!theme.is_dark);
    }

    #[test]
    fn midnight_is_dark() {
        assert!(ThemePreset::Midnight.theme().is_dark);
    }

    #[test]
    fn preset_serializes_by_name() {
        let json = serde_json::to_string(&ThemePreset::Vintage).unwrap();
        assert_eq!(json, "\"Vintage\"");
        let parsed: ThemePreset = serde_json::from_str("\"nature\"").unwrap();
        assert_eq!(parsed, ThemePreset::Nature);
        assert!(serde_json::from_str::<ThemePreset>("\"neon\"").is_err());
    }

    #[test]
    fn countdown_messages_follow_status() {
        let theme = ThemePreset::Default.theme();

        assert_eq!(
            theme.countdown_message(&CountdownStatus::NotConfigured),
            theme.copy.not_configured_prompt
        );

        let counting = theme.countdown_message(&CountdownStatus::Counting(TimeRemaining {
            days: 3,
            hours: 4,
            minutes: 5,
            seconds: 6,
        }));
        assert!(counting.contains("3d 04h 05m 06s"));
        assert!(counting.contains(&theme.copy.countdown_heading));

        let invalid = theme.countdown_message(&CountdownStatus::Invalid(
            CountdownError::InvalidFormat("oops".into()),
        ));
        assert!(invalid.starts_with(&theme.copy.invalid_date_notice));
        assert!(invalid.contains("oops"));
    }

    #[test]
    fn particle_line_follows_decorations() {
        let mut decorations = ThemeDecorations {
            emoji: "🌙".to_string(),
            particle_count: 4,
            sparkle: true,
        };
        assert_eq!(decorations.particle_line(), "🌙 ✨ 🌙 ✨");

        decorations.sparkle = false;
        assert_eq!(decorations.particle_line(), "🌙 🌙 🌙 🌙");

        decorations.particle_count = 0;
        assert_eq!(decorations.particle_line(), "");
    }

    #[test]
    fn front_page_shows_letter_once_opened() {
        let theme = ThemePreset::Midnight.theme();

        let closed = theme.front_page(false);
        assert_eq!(closed.len(), 2);
        assert!(closed[0].contains("✨"));
        assert_eq!(closed[1], "🌙 Midnight album 🌙");

        let opened = theme.front_page(true);
        assert_eq!(opened[1], format!("🌙 {}", theme.copy.letter_heading));
    }

    #[test]
    fn front_page_without_particles_is_one_line() {
        let theme = ThemePreset::Vintage.theme();
        assert_eq!(theme.decorations.particle_count, 0);
        assert_eq!(theme.front_page(true).len(), 1);
    }
}
