//! Configuration file loading
//!
//! Settings come from a TOML file with `[matching]`, `[highlight]` and
//! `[log]` sections. Every field has a default, so a missing file or a
//! missing section is fine.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use sift_match::{HighlightStyle, MatcherConfig, Rgb, ThemeHighlight};
use sift_telemetry::TelemetryConfig;
use std::path::{Path, PathBuf};

/// Root configuration schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigSchema {
    #[serde(default)]
    pub matching: MatcherConfig,

    #[serde(default)]
    pub highlight: HighlightConfig,

    #[serde(default)]
    pub log: TelemetryConfig,
}

/// A single text attribute name in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleName {
    Bold,
    Underline,
    Italic,
    Color,
}

impl From<StyleName> for HighlightStyle {
    fn from(name: StyleName) -> Self {
        match name {
            StyleName::Bold => HighlightStyle::BOLD,
            StyleName::Underline => HighlightStyle::UNDERLINE,
            StyleName::Italic => HighlightStyle::ITALIC,
            StyleName::Color => HighlightStyle::COLOR,
        }
    }
}

/// How matched text is marked up with `--highlight`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightConfig {
    #[serde(default = "default_styles")]
    pub styles: Vec<StyleName>,

    /// Foreground color, channels in 0-1; implies the `color` style
    #[serde(default)]
    pub color: Option<[f64; 3]>,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            styles: default_styles(),
            color: None,
        }
    }
}

fn default_styles() -> Vec<StyleName> {
    vec![StyleName::Bold]
}

impl HighlightConfig {
    /// Builds the theme handed to the highlighter.
    pub fn theme(&self) -> ThemeHighlight {
        let style = self
            .styles
            .iter()
            .fold(HighlightStyle::empty(), |acc, &name| acc | HighlightStyle::from(name));

        match self.color {
            Some([red, green, blue]) => ThemeHighlight::colored(style, Rgb::new(red, green, blue)),
            None => ThemeHighlight::new(style - HighlightStyle::COLOR),
        }
    }
}

/// Configuration wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    ///
    /// An explicit path must exist; otherwise the standard locations are
    /// searched and defaults are used when none exists.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let config_path = path.map(Path::to_path_buf).or_else(find_config_file);

        let schema = match config_path {
            Some(ref p) => load_config_file(p)?,
            None => ConfigSchema::default(),
        };

        Ok(Self {
            schema,
            path: config_path,
        })
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    [".sift.toml", "sift.toml", ".config/sift.toml"]
        .into_iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> anyhow::Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}
