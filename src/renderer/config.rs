//! Configuration for path emission

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::flatten::DEFAULT_FLATTEN_STEP;

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// How coordinates are written into the path text
///
/// Implied midpoints and flattened curve samples carry sub-unit precision,
/// so fractional output is the default; integer truncation is an explicit
/// formatting choice for consumers that want the terser legacy output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordFormat {
    /// Full precision, shortest decimal representation
    #[default]
    Fractional,
    /// Truncate toward zero to whole font units
    Truncated,
}

/// Configuration options for path output
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Emit native `Q` curve statements; when false, curves are flattened
    /// into line segments instead
    pub curve_statements: bool,

    /// Parametric step between flattening samples
    pub flatten_step: f64,

    /// Coordinate formatting in the emitted path text
    pub coordinates: CoordFormat,

    /// Fill color of the emitted `<path>` element
    pub fill: String,

    /// Stroke color of the emitted `<path>` element
    pub stroke: String,

    /// Fill opacity of the emitted `<path>` element
    pub fill_opacity: f64,

    /// Stroke width of the emitted `<path>` element
    pub stroke_width: f64,

    /// Optional CSS class for the emitted `<path>` element
    pub css_class: Option<String>,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            curve_statements: true,
            flatten_step: DEFAULT_FLATTEN_STEP,
            coordinates: CoordFormat::default(),
            fill: "black".to_string(),
            stroke: "black".to_string(),
            fill_opacity: 0.45,
            stroke_width: 2.0,
            css_class: None,
        }
    }
}

impl PathConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Set whether curves are emitted as `Q` statements
    pub fn with_curve_statements(mut self, curve_statements: bool) -> Self {
        self.curve_statements = curve_statements;
        self
    }

    /// Set the flattening step
    pub fn with_flatten_step(mut self, step: f64) -> Self {
        self.flatten_step = step;
        self
    }

    /// Set the coordinate format
    pub fn with_coordinates(mut self, coordinates: CoordFormat) -> Self {
        self.coordinates = coordinates;
        self
    }

    /// Set the fill color
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Set the stroke color
    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = stroke.into();
        self
    }

    /// Set the fill opacity
    pub fn with_fill_opacity(mut self, opacity: f64) -> Self {
        self.fill_opacity = opacity;
        self
    }

    /// Set the stroke width
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    /// Set a CSS class on the emitted element
    pub fn with_css_class(mut self, class: impl Into<String>) -> Self {
        self.css_class = Some(class.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PathConfig::default();
        assert!(config.curve_statements);
        assert_eq!(config.flatten_step, 0.1);
        assert_eq!(config.coordinates, CoordFormat::Fractional);
        assert_eq!(config.fill, "black");
        assert_eq!(config.stroke, "black");
        assert_eq!(config.fill_opacity, 0.45);
        assert_eq!(config.stroke_width, 2.0);
        assert_eq!(config.css_class, None);
    }

    #[test]
    fn test_builder_pattern() {
        let config = PathConfig::new()
            .with_curve_statements(false)
            .with_flatten_step(0.25)
            .with_coordinates(CoordFormat::Truncated)
            .with_fill("none")
            .with_stroke("#333")
            .with_fill_opacity(1.0)
            .with_stroke_width(0.5)
            .with_css_class("glyph");

        assert!(!config.curve_statements);
        assert_eq!(config.flatten_step, 0.25);
        assert_eq!(config.coordinates, CoordFormat::Truncated);
        assert_eq!(config.fill, "none");
        assert_eq!(config.stroke, "#333");
        assert_eq!(config.fill_opacity, 1.0);
        assert_eq!(config.stroke_width, 0.5);
        assert_eq!(config.css_class, Some("glyph".to_string()));
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
curve_statements = false
flatten_step = 0.2
coordinates = "truncated"
fill = "steelblue"
"#;
        let config = PathConfig::from_toml_str(toml_str).expect("Should parse");
        assert!(!config.curve_statements);
        assert_eq!(config.flatten_step, 0.2);
        assert_eq!(config.coordinates, CoordFormat::Truncated);
        assert_eq!(config.fill, "steelblue");
        // Unspecified fields keep their defaults
        assert_eq!(config.stroke, "black");
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = PathConfig::from_toml_str("this is not valid toml {{{{");
        assert!(result.is_err());
    }
}
