// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Runtime configuration loaded from TOML.
//!
//! Every field is optional; anything left out falls back to `settings.rs`
//! and `theme.rs`.
//!
//! ```toml
//! polygon = [
//!     { x = 0.0, y = 0.0 },
//!     { x = 100.0, y = 0.0 },
//!     { x = 50.0, y = 80.0 },
//! ]
//!
//! [colors]
//! first_half = "red"
//! ```

use crate::model::Polygon;
use crate::{settings, theme};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The shape offered for cutting
    pub polygon: Polygon,
    pub canvas: CanvasConfig,
    pub colors: ColorConfig,
}

/// Drawing surface size
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
}

/// Stroke colors (any CSS color string)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub original: String,
    pub first_half: String,
    pub second_half: String,
    pub knife: String,
    /// Crossing markers shown while aiming
    pub marker: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: settings::canvas::WIDTH,
            height: settings::canvas::HEIGHT,
        }
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            original: theme::outline::ORIGINAL.to_string(),
            first_half: theme::outline::FIRST_HALF.to_string(),
            second_half: theme::outline::SECOND_HALF.to_string(),
            knife: theme::knife::LINE_COLOR.to_string(),
            marker: theme::knife::MARKER_COLOR.to_string(),
        }
    }
}

impl Config {
    /// Parse a config from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid config")
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        tracing::info!(
            "Loaded config from {} ({} vertices)",
            path.display(),
            config.polygon.len()
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.polygon.len(), 7);
        assert_eq!(config.colors.first_half, "blue");
        assert_eq!(config.colors.second_half, "green");
        assert_eq!(config.canvas.width, 500.0);
    }

    #[test]
    fn overrides_polygon_and_colors() {
        let config = Config::from_toml_str(
            r#"
            polygon = [
                { x = 0.0, y = 0.0 },
                { x = 100.0, y = 0.0 },
                { x = 50.0, y = 80.0 },
            ]

            [colors]
            first_half = "red"

            [canvas]
            height = 200.0
            "#,
        )
        .unwrap();

        assert_eq!(config.polygon.points()[2], Point::new(50.0, 80.0));
        assert_eq!(config.colors.first_half, "red");
        assert_eq!(config.colors.second_half, "green");
        assert_eq!(config.canvas.width, 500.0);
        assert_eq!(config.canvas.height, 200.0);
    }

    #[test]
    fn rejects_degenerate_polygon() {
        let result = Config::from_toml_str("polygon = [{ x = 0.0, y = 0.0 }, { x = 1.0, y = 1.0 }]");
        assert!(result.is_err());
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(Config::from_toml_str("colour = \"red\"").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = Config::load(Path::new("/nonexistent/polysplit.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
