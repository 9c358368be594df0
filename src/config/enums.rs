//! Configuration enum types.

use crate::draw::{BLACK, Color};
use crate::input::Theme;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Background theme selected at startup.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeName {
    /// White background
    #[default]
    Light,
    /// Near-black background
    Dark,
}

impl From<ThemeName> for Theme {
    fn from(name: ThemeName) -> Self {
        match name {
            ThemeName::Light => Theme::Light,
            ThemeName::Dark => Theme::Dark,
        }
    }
}

/// Color specification - either a CSS color string or RGB values.
///
/// # Examples
/// ```toml
/// # Any CSS color: names, hex, rgb(), hsl()
/// default_color = "black"
/// default_color = "#ff8000"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// CSS color string
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct, or `None` if
    /// the string is not a valid CSS color.
    pub fn parse(&self) -> Option<Color> {
        match self {
            ColorSpec::Name(name) => Color::parse(name).ok(),
            ColorSpec::Rgb([r, g, b]) => Some(Color::from_rgb8(*r, *g, *b)),
        }
    }

    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Unknown color strings fall back to `fallback` with a warning.
    pub fn to_color_or(&self, fallback: Color) -> Color {
        self.parse().unwrap_or_else(|| {
            warn!("Unknown color {:?}, using {}", self, fallback);
            fallback
        })
    }

    /// Converts the color specification to a [`Color`] struct, defaulting to black.
    pub fn to_color(&self) -> Color {
        self.to_color_or(BLACK)
    }
}
