//! Configuration loading from TOML files.
//!
//! Lookup order:
//! 1. `$RUSTY_STATS_CONFIG` environment variable
//! 2. `~/.config/rusty-stats/config.toml`
//! 3. Built-in defaults (everything is optional)

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub histogram: HistogramConfig,
    pub display: DisplayConfig,
    pub session: SessionConfig,
}

/// Which histogram renderer the session uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    /// Native window, falls back to text when no display is available.
    Window,
    Text,
    /// PNG file at `histogram.output`.
    Image,
}

/// Histogram settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HistogramConfig {
    pub bins: usize,
    pub renderer: RendererKind,
    pub output: PathBuf,
    /// Longest bar of the text renderer, in characters.
    pub width: usize,
}

/// Console output settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Decimals printed for each statistic.
    pub precision: usize,
}

/// Interactive session settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Accept `browse` at the file prompt to open a file picker.
    pub browse: bool,
}

// --- Defaults ---

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            bins: 20,
            renderer: RendererKind::Window,
            output: PathBuf::from("histogram.png"),
            width: 50,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { precision: 4 }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { browse: true }
    }
}

/// Load config from disk. Returns defaults if no config file exists.
pub fn load_config() -> Result<Config> {
    let path = config_path();

    if let Some(p) = &path {
        if p.exists() {
            let content =
                std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
            let config: Config =
                toml::from_str(&content).with_context(|| format!("parsing {}", p.display()))?;
            log::debug!("Loaded config from {}", p.display());
            return Ok(config);
        }
    }

    Ok(Config::default())
}

/// Resolve the config file path.
fn config_path() -> Option<PathBuf> {
    if let Ok(p) = std::env::var("RUSTY_STATS_CONFIG") {
        return Some(PathBuf::from(p));
    }

    std::env::var("HOME").ok().map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join("rusty-stats")
            .join("config.toml")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.histogram.bins, 20);
        assert_eq!(config.histogram.renderer, RendererKind::Window);
        assert_eq!(config.display.precision, 4);
        assert!(config.session.browse);
    }

    #[test]
    fn test_parse_minimal_toml() {
        let toml_str = r#"
[histogram]
renderer = "text"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.histogram.renderer, RendererKind::Text);
        // Other fields should be defaults
        assert_eq!(config.histogram.bins, 20);
        assert_eq!(config.display.precision, 4);
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r#"
[histogram]
bins = 10
renderer = "image"
output = "/tmp/out.png"
width = 30

[display]
precision = 2

[session]
browse = false
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.histogram.bins, 10);
        assert_eq!(config.histogram.renderer, RendererKind::Image);
        assert_eq!(config.histogram.output, PathBuf::from("/tmp/out.png"));
        assert_eq!(config.histogram.width, 30);
        assert_eq!(config.display.precision, 2);
        assert!(!config.session.browse);
    }

    #[test]
    fn test_unknown_renderer_rejected() {
        let toml_str = r#"
[histogram]
renderer = "svg"
"#;
        assert!(toml::from_str::<Config>(toml_str).is_err());
    }
}
