//! Background theme selection.

use crate::draw::Color;

/// Background theme of the canvas.
///
/// Erased areas reveal the theme background, so switching themes changes
/// the picture without touching any stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    /// Light background (default)
    #[default]
    Light,
    /// Dark background
    Dark,
}

/// Background colors for each theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemePalette {
    pub light_background: Color,
    pub dark_background: Color,
}

impl Default for ThemePalette {
    fn default() -> Self {
        Self {
            light_background: Color::from_rgb8(0xff, 0xff, 0xff),
            dark_background: Color::from_rgb8(0x1a, 0x1a, 0x1a),
        }
    }
}

impl Theme {
    /// Returns the background fill for this theme.
    pub fn background_color(&self, palette: &ThemePalette) -> Color {
        match self {
            Self::Light => palette.light_background,
            Self::Dark => palette.dark_background,
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_theme_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_background_color() {
        let palette = ThemePalette::default();

        assert_eq!(Theme::Light.background_color(&palette).to_string(), "#ffffff");
        assert_eq!(Theme::Dark.background_color(&palette).to_string(), "#1a1a1a");
    }

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Theme::from_str("light").unwrap(), Theme::Light);
        assert_eq!(Theme::from_str("DARK").unwrap(), Theme::Dark);
        assert!(Theme::from_str("sepia").is_err());
    }
}
