//! Configuration file support for inkboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/inkboard/config.toml`. Settings include the starting brush,
//! theme backgrounds, canvas sizing and export defaults.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ColorSpec, ThemeName};
pub use types::{CanvasConfig, DrawingConfig, ExportConfig, ThemeConfig};

use crate::util::MAX_CANVAS_DIMENSION;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "black"
/// default_width = 5.0
///
/// [theme]
/// default_theme = "dark"
///
/// [canvas]
/// max_width_fraction = 0.95
/// max_height_fraction = 0.7
///
/// [export]
/// default_file_name = "my_drawing"
/// save_directory = "~/Pictures/Inkboard"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Brush defaults (color, width)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Light/dark background settings
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Canvas aspect ratio and viewport fitting
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// PNG export defaults
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or reset to the
    /// default when not a number) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_width`: 1.0 - 100.0
    /// - `logical_width` / `logical_height`: 1 - 8192
    /// - `max_width_fraction` / `max_height_fraction`: 0.1 - 1.0
    pub fn validate_and_clamp(&mut self) {
        // Width: 1.0 - 100.0
        self.drawing.default_width = clamp_setting(
            "default_width",
            self.drawing.default_width,
            1.0,
            100.0,
            types::default_width(),
        );

        // Logical size: 1 - MAX_CANVAS_DIMENSION
        for (name, value) in [
            ("logical_width", &mut self.canvas.logical_width),
            ("logical_height", &mut self.canvas.logical_height),
        ] {
            if !(1..=MAX_CANVAS_DIMENSION).contains(&*value) {
                log::warn!(
                    "Invalid {} {}, clamping to 1-{} range",
                    name,
                    value,
                    MAX_CANVAS_DIMENSION
                );
                *value = (*value).clamp(1, MAX_CANVAS_DIMENSION);
            }
        }

        // Viewport fractions: 0.1 - 1.0
        self.canvas.max_width_fraction = clamp_setting(
            "max_width_fraction",
            self.canvas.max_width_fraction,
            0.1,
            1.0,
            types::default_max_width_fraction(),
        );
        self.canvas.max_height_fraction = clamp_setting(
            "max_height_fraction",
            self.canvas.max_height_fraction,
            0.1,
            1.0,
            types::default_max_height_fraction(),
        );

        // Colors must parse; fall back to defaults otherwise
        if self.drawing.default_color.parse().is_none() {
            log::warn!(
                "Invalid default_color {:?}, falling back to default",
                self.drawing.default_color
            );
            self.drawing.default_color = DrawingConfig::default().default_color;
        }
        let theme_defaults = ThemeConfig::default();
        if self.theme.light_background.parse().is_none() {
            log::warn!(
                "Invalid light_background {:?}, falling back to default",
                self.theme.light_background
            );
            self.theme.light_background = theme_defaults.light_background;
        }
        if self.theme.dark_background.parse().is_none() {
            log::warn!(
                "Invalid dark_background {:?}, falling back to default",
                self.theme.dark_background
            );
            self.theme.dark_background = theme_defaults.dark_background;
        }

        if self.export.default_file_name.trim().is_empty() {
            log::warn!("Blank default_file_name, falling back to default");
            self.export.default_file_name = types::default_file_name();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/inkboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("inkboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// Attempts to read and parse the config file at `~/.config/inkboard/config.toml`.
    /// If the file doesn't exist, returns a Config with default values.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates the configuration at `config_path`.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's config directory.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        // Create directory
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&config_path, EXAMPLE_CONFIG)?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

/// Documented example configuration shipped with the crate.
pub const EXAMPLE_CONFIG: &str = include_str!("../../config.example.toml");

fn clamp_setting(name: &str, value: f64, min: f64, max: f64, default: f64) -> f64 {
    if !value.is_finite() {
        log::warn!("Invalid {} {}, using default {:.2}", name, value, default);
        return default;
    }
    if !(min..=max).contains(&value) {
        log::warn!(
            "Invalid {} {:.2}, clamping to {:.1}-{:.1} range",
            name,
            value,
            min,
            max
        );
        return value.clamp(min, max);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, Color};
    use crate::input::Theme;
    use crate::util::CanvasSize;

    #[test]
    fn defaults_match_builtin_behavior() {
        let config = Config::default();

        assert_eq!(config.drawing.default_color.to_color(), BLACK);
        assert_eq!(config.drawing.default_width, 5.0);
        assert_eq!(Theme::from(config.theme.default_theme), Theme::Light);
        assert_eq!(config.theme.palette(), crate::input::ThemePalette::default());
        assert_eq!(config.canvas.layout(), crate::util::CanvasLayout::default());
        assert_eq!(config.export.default_file_name, "my_drawing");
    }

    #[test]
    fn example_config_parses_to_defaults() {
        let mut config: Config = toml::from_str(EXAMPLE_CONFIG).unwrap();
        config.validate_and_clamp();

        assert_eq!(config.drawing.default_width, 5.0);
        assert_eq!(config.canvas.logical_width, 800);
        assert_eq!(config.canvas.logical_height, 500);
        assert_eq!(config.export.default_file_name, "my_drawing");
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [drawing]
            default_color = [255, 128, 0]

            [theme]
            default_theme = "dark"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.drawing.default_color.to_color(),
            Color::from_rgb8(255, 128, 0)
        );
        assert_eq!(config.drawing.default_width, 5.0);
        assert_eq!(Theme::from(config.theme.default_theme), Theme::Dark);
        assert_eq!(config.canvas.max_width_fraction, 0.95);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config: Config = toml::from_str(
            r#"
            [drawing]
            default_width = 500.0

            [canvas]
            logical_width = 0
            max_width_fraction = 0.01
            max_height_fraction = 3.0
            "#,
        )
        .unwrap();

        config.validate_and_clamp();

        assert_eq!(config.drawing.default_width, 100.0);
        assert_eq!(config.canvas.logical_width, 1);
        assert_eq!(config.canvas.max_width_fraction, 0.1);
        assert_eq!(config.canvas.max_height_fraction, 1.0);
        assert_eq!(
            config.canvas.layout().logical_size,
            CanvasSize::new(1, 500)
        );
    }

    #[test]
    fn invalid_colors_and_names_fall_back() {
        let mut config: Config = toml::from_str(
            r##"
            [drawing]
            default_color = "not-a-color"

            [theme]
            dark_background = "#zzzzzz"

            [export]
            default_file_name = "   "
            "##,
        )
        .unwrap();

        config.validate_and_clamp();

        assert_eq!(config.drawing.default_color.to_color(), BLACK);
        assert_eq!(config.theme.palette().dark_background.to_string(), "#1a1a1a");
        assert_eq!(config.export.default_file_name, "my_drawing");
    }

    #[test]
    fn unknown_theme_is_a_parse_error() {
        let result: Result<Config, _> = toml::from_str("[theme]\ndefault_theme = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_from_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn load_from_reads_and_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[drawing]\ndefault_width = 0.5\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.drawing.default_width, 1.0);
    }

    #[test]
    fn schema_names_every_section() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        for section in ["drawing", "theme", "canvas", "export"] {
            assert!(properties.contains_key(section), "missing {section}");
        }
    }
}
