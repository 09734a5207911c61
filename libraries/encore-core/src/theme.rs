//! Appearance settings
//!
//! Pure data: the presentation layer maps these to its own styling.

use serde::{Deserialize, Serialize};

/// Light/dark preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Follow the device setting
    #[default]
    System,
    Light,
    Dark,
}

impl ColorScheme {
    /// Resolve against the device scheme
    ///
    /// `System` yields whatever the device reports (which may be unknown).
    pub fn resolve(self, device: Option<ColorScheme>) -> Option<ColorScheme> {
        match self {
            Self::System => device.filter(|d| *d != Self::System),
            explicit => Some(explicit),
        }
    }
}

/// Text size preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    /// Multiplier applied to base text sizes
    pub fn scale(self) -> f32 {
        match self {
            Self::Small => 0.85,
            Self::Medium => 1.0,
            Self::Large => 1.15,
        }
    }
}

/// Font family variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    #[default]
    Inter,
    InterMedium,
    InterSemiBold,
    InterBold,
    InterItalic,
    InterLight,
    InterExtraLight,
    InterBlack,
}

/// Resolved font style for a family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontStyle {
    /// CSS-style numeric weight
    pub weight: u16,
    pub italic: bool,
}

impl FontFamily {
    /// Weight and slant for this family
    pub fn style(self) -> FontStyle {
        let (weight, italic) = match self {
            Self::Inter => (400, false),
            Self::InterMedium => (500, false),
            Self::InterSemiBold => (600, false),
            Self::InterBold => (700, false),
            Self::InterItalic => (400, true),
            Self::InterLight => (300, false),
            Self::InterExtraLight => (200, false),
            Self::InterBlack => (900, false),
        };
        FontStyle { weight, italic }
    }
}

/// Background gradient preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundTheme {
    #[default]
    Default,
    Sunset,
    Ocean,
    Forest,
    Aurora,
    Midnight,
}

impl BackgroundTheme {
    /// Gradient stops as hex colours, top to bottom
    pub fn gradient(self) -> [&'static str; 3] {
        match self {
            Self::Default => ["#4A148C", "#311B92", "#1A237E"],
            Self::Sunset => ["#FF512F", "#DD2476", "#FF0080"],
            Self::Ocean => ["#2E3192", "#1BFFFF", "#D4FFFF"],
            Self::Forest => ["#134E5E", "#71B280", "#2ECC71"],
            Self::Aurora => ["#1D976C", "#93F9B9", "#2ECC71"],
            Self::Midnight => ["#232526", "#414345", "#000000"],
        }
    }
}

/// User appearance preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    pub color_scheme: ColorScheme,
    pub font_size: FontSize,
    pub font_family: FontFamily,
    pub background: BackgroundTheme,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_first_launch() {
        let settings = ThemeSettings::default();
        assert_eq!(settings.color_scheme, ColorScheme::System);
        assert_eq!(settings.font_size.scale(), 1.0);
        assert_eq!(settings.font_family.style().weight, 400);
        assert_eq!(settings.background.gradient()[0], "#4A148C");
    }

    #[test]
    fn system_scheme_follows_device() {
        assert_eq!(
            ColorScheme::System.resolve(Some(ColorScheme::Dark)),
            Some(ColorScheme::Dark)
        );
        assert_eq!(ColorScheme::System.resolve(None), None);
        assert_eq!(
            ColorScheme::Light.resolve(Some(ColorScheme::Dark)),
            Some(ColorScheme::Light)
        );
    }

    #[test]
    fn italic_family_keeps_regular_weight() {
        let style = FontFamily::InterItalic.style();
        assert!(style.italic);
        assert_eq!(style.weight, 400);
    }
}
