//! Configuration types for archmap diagram rendering.
//!
//! This module provides configuration structures that control where the
//! generated artifacts are written and how the graphical diagram is styled.
//! All types implement [`serde::Deserialize`] for loading from TOML.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining output and style settings.
//! - [`OutputConfig`] - Output file paths for the two generators.
//! - [`StyleConfig`] - Graph-level styling passed through to Graphviz.
//!
//! # Example
//!
//! ```
//! # use archmap::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.output().image().to_str(), Some("docs/architecture-diagram.png"));
//! assert_eq!(config.style().direction().rankdir(), "LR");
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level application configuration combining output and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Output path configuration section.
    #[serde(default)]
    output: OutputConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified output and style configurations.
    pub fn new(output: OutputConfig, style: StyleConfig) -> Self {
        Self { output, style }
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

fn default_image_path() -> PathBuf {
    PathBuf::from("docs/architecture-diagram.png")
}

fn default_text_path() -> PathBuf {
    PathBuf::from("docs/architecture-diagram.txt")
}

/// Output file paths for the two generators.
///
/// Both paths are relative to the working directory by default and point
/// into `docs/`. The containing directory is not created; writing into a
/// missing directory is an error.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path of the rendered PNG diagram.
    #[serde(default = "default_image_path")]
    image: PathBuf,

    /// Path of the ASCII diagram text file.
    #[serde(default = "default_text_path")]
    text: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            image: default_image_path(),
            text: default_text_path(),
        }
    }
}

impl OutputConfig {
    /// Creates a new [`OutputConfig`] with the specified paths.
    pub fn new(image: PathBuf, text: PathBuf) -> Self {
        Self { image, text }
    }

    /// Returns the PNG output path.
    pub fn image(&self) -> &Path {
        &self.image
    }

    /// Returns the text output path.
    pub fn text(&self) -> &Path {
        &self.text
    }
}

fn default_font_size() -> u32 {
    16
}

fn default_background() -> String {
    "white".to_string()
}

fn default_pad() -> f64 {
    0.5
}

/// Graph-level styling passed through to Graphviz.
///
/// These map one-to-one onto top-level DOT attributes; node and edge
/// styling is derived from each node's category instead.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleConfig {
    /// Title font size in points (`fontsize`).
    #[serde(default = "default_font_size")]
    font_size: u32,

    /// Background color (`bgcolor`), any color string Graphviz accepts.
    #[serde(default = "default_background")]
    background: String,

    /// Padding around the drawing in inches (`pad`).
    #[serde(default = "default_pad")]
    pad: f64,

    /// Rank direction of the layout.
    #[serde(default)]
    direction: Direction,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            background: default_background(),
            pad: default_pad(),
            direction: Direction::default(),
        }
    }
}

impl StyleConfig {
    /// Returns the title font size in points.
    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    /// Returns the background color string.
    pub fn background(&self) -> &str {
        &self.background
    }

    /// Returns the padding in inches.
    pub fn pad(&self) -> f64 {
        self.pad
    }

    /// Returns the rank direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

/// Rank direction of the Graphviz layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Left to right (`rankdir=LR`), the layout the architecture diagram uses.
    #[default]
    LeftRight,
    /// Right to left (`rankdir=RL`).
    RightLeft,
    /// Top to bottom (`rankdir=TB`).
    TopBottom,
    /// Bottom to top (`rankdir=BT`).
    BottomTop,
}

impl Direction {
    /// Returns the DOT `rankdir` value for this direction.
    pub fn rankdir(self) -> &'static str {
        match self {
            Direction::LeftRight => "LR",
            Direction::RightLeft => "RL",
            Direction::TopBottom => "TB",
            Direction::BottomTop => "BT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_script() {
        let config = AppConfig::default();

        assert_eq!(
            config.output().image(),
            Path::new("docs/architecture-diagram.png")
        );
        assert_eq!(
            config.output().text(),
            Path::new("docs/architecture-diagram.txt")
        );
        assert_eq!(config.style().font_size(), 16);
        assert_eq!(config.style().background(), "white");
        assert_eq!(config.style().pad(), 0.5);
        assert_eq!(config.style().direction(), Direction::LeftRight);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(config.style().direction().rankdir(), "LR");
        assert_eq!(
            config.output().text(),
            Path::new("docs/architecture-diagram.txt")
        );
    }

    #[test]
    fn test_partial_toml_overrides() {
        let source = r#"
            [output]
            image = "out/diagram.png"

            [style]
            direction = "top-bottom"
            font_size = 12
        "#;
        let config: AppConfig = toml::from_str(source).expect("config should parse");

        assert_eq!(config.output().image(), Path::new("out/diagram.png"));
        // Unset fields keep their defaults.
        assert_eq!(
            config.output().text(),
            Path::new("docs/architecture-diagram.txt")
        );
        assert_eq!(config.style().direction().rankdir(), "TB");
        assert_eq!(config.style().font_size(), 12);
        assert_eq!(config.style().background(), "white");
    }
}
