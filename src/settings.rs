// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Application settings and configuration constants.
//!
//! This module holds non-visual settings. Visual styling (colors, stroke
//! widths) belongs in `theme.rs`. Both can be overridden at runtime with a
//! TOML config file, see `config.rs`.

use kurbo::Point;

// ============================================================================
// CANVAS SETTINGS
// ============================================================================
/// Width of the drawing surface (canvas units)
const CANVAS_WIDTH: f64 = 500.0;

/// Height of the drawing surface (canvas units)
const CANVAS_HEIGHT: f64 = 500.0;

// ============================================================================
// DEFAULT SHAPE
// ============================================================================
/// The heptagon offered for cutting when no config overrides it
const DEFAULT_POLYGON: [(f64, f64); 7] = [
    (100.0, 100.0),
    (200.0, 50.0),
    (300.0, 50.0),
    (400.0, 200.0),
    (350.0, 250.0),
    (200.0, 300.0),
    (150.0, 300.0),
];

// ============================================================================
// LOGGING
// ============================================================================
/// Filter directive applied on top of `RUST_LOG`
const LOG_DIRECTIVE: &str = "polysplit=info";

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Drawing surface settings
pub mod canvas {
    pub const WIDTH: f64 = super::CANVAS_WIDTH;
    pub const HEIGHT: f64 = super::CANVAS_HEIGHT;
}

/// Logging settings
pub mod logging {
    /// Default directive for the tracing subscriber
    pub const DIRECTIVE: &str = super::LOG_DIRECTIVE;
}

/// The default heptagon as points
pub fn default_polygon() -> Vec<Point> {
    DEFAULT_POLYGON
        .iter()
        .map(|&(x, y)| Point::new(x, y))
        .collect()
}
