//! Configuration type definitions.

use super::enums::{ColorSpec, ThemeName};
use crate::draw::Color;
use crate::export::{DEFAULT_FILE_NAME, expand_tilde};
use crate::input::ThemePalette;
use crate::util::{CanvasLayout, CanvasSize};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Drawing-related settings.
///
/// Controls the brush the surface starts with. Users can change these values
/// at runtime through the tool controls.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default brush color - any CSS color string or an RGB array like
    /// `[0, 0, 0]` for black
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default brush width in logical pixels (valid range: 1.0 - 100.0)
    #[serde(default = "default_width")]
    pub default_width: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_width: default_width(),
        }
    }
}

/// Background theme settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ThemeConfig {
    /// Theme at startup: "light" or "dark"
    #[serde(default)]
    pub default_theme: ThemeName,

    /// Background of the light theme
    #[serde(default = "default_light_background")]
    pub light_background: ColorSpec,

    /// Background of the dark theme
    #[serde(default = "default_dark_background")]
    pub dark_background: ColorSpec,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_theme: ThemeName::default(),
            light_background: default_light_background(),
            dark_background: default_dark_background(),
        }
    }
}

impl ThemeConfig {
    /// Resolves both backgrounds. Unknown colors fall back to the built-in ones.
    pub fn palette(&self) -> ThemePalette {
        let fallback = ThemePalette::default();
        ThemePalette {
            light_background: self.light_background.to_color_or(fallback.light_background),
            dark_background: self.dark_background.to_color_or(fallback.dark_background),
        }
    }
}

/// Canvas sizing settings.
///
/// The logical size fixes the aspect ratio and the initial backing-store
/// resolution. On every viewport resize the canvas is fitted inside the
/// given fractions of the viewport.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Logical canvas width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_logical_width")]
    pub logical_width: i32,

    /// Logical canvas height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_logical_height")]
    pub logical_height: i32,

    /// Largest share of the viewport width the canvas may use (valid range: 0.1 - 1.0)
    #[serde(default = "default_max_width_fraction")]
    pub max_width_fraction: f64,

    /// Largest share of the viewport height the canvas may use (valid range: 0.1 - 1.0)
    #[serde(default = "default_max_height_fraction")]
    pub max_height_fraction: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            logical_width: default_logical_width(),
            logical_height: default_logical_height(),
            max_width_fraction: default_max_width_fraction(),
            max_height_fraction: default_max_height_fraction(),
        }
    }
}

impl CanvasConfig {
    pub fn layout(&self) -> CanvasLayout {
        CanvasLayout {
            logical_size: CanvasSize::new(self.logical_width, self.logical_height),
            max_width_fraction: self.max_width_fraction,
            max_height_fraction: self.max_height_fraction,
        }
    }
}

/// PNG export settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Base file name used when no name (or a blank one) is supplied
    #[serde(default = "default_file_name")]
    pub default_file_name: String,

    /// Directory exported images are written to (supports `~`)
    #[serde(default = "default_save_directory")]
    pub save_directory: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_file_name: default_file_name(),
            save_directory: default_save_directory(),
        }
    }
}

impl ExportConfig {
    /// Save directory with `~` expanded.
    pub fn save_directory(&self) -> PathBuf {
        expand_tilde(&self.save_directory)
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

pub(super) fn default_width() -> f64 {
    5.0
}

fn default_light_background() -> ColorSpec {
    ColorSpec::Name(Color::from_rgb8(0xff, 0xff, 0xff).to_string())
}

fn default_dark_background() -> ColorSpec {
    ColorSpec::Name(Color::from_rgb8(0x1a, 0x1a, 0x1a).to_string())
}

fn default_logical_width() -> i32 {
    800
}

fn default_logical_height() -> i32 {
    500
}

pub(super) fn default_max_width_fraction() -> f64 {
    0.95
}

pub(super) fn default_max_height_fraction() -> f64 {
    0.7
}

pub(super) fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

fn default_save_directory() -> String {
    "~/Pictures/Inkboard".to_string()
}
