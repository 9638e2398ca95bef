// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! Colors are CSS color strings so they can be handed straight to SVG
//! `stroke` attributes.

// ============================================================================
// OUTLINES
// ============================================================================
const ORIGINAL_OUTLINE: &str = "black";
const FIRST_HALF_OUTLINE: &str = "blue";
const SECOND_HALF_OUTLINE: &str = "green";

// ============================================================================
// KNIFE PREVIEW
// ============================================================================
const KNIFE_LINE: &str = "black";
const KNIFE_LINE_WIDTH: f64 = 1.0;

// Crossing markers (green X, matching corner points in the glyph editor)
const KNIFE_MARKER: &str = "#6ae756";
const KNIFE_MARKER_SIZE: f64 = 6.0;
const KNIFE_MARKER_WIDTH: f64 = 3.0;

// ============================================================================
// OUTLINE STROKE
// ============================================================================
const OUTLINE_WIDTH: f64 = 1.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Polygon outline colors
pub mod outline {
    /// The uncut polygon
    pub const ORIGINAL: &str = super::ORIGINAL_OUTLINE;
    /// First half after a split
    pub const FIRST_HALF: &str = super::FIRST_HALF_OUTLINE;
    /// Second half after a split
    pub const SECOND_HALF: &str = super::SECOND_HALF_OUTLINE;
    pub const WIDTH: f64 = super::OUTLINE_WIDTH;
}

/// The line drawn while dragging
pub mod knife {
    pub const LINE_COLOR: &str = super::KNIFE_LINE;
    pub const LINE_WIDTH: f64 = super::KNIFE_LINE_WIDTH;
    /// X marks where the line crosses the outline
    pub const MARKER_COLOR: &str = super::KNIFE_MARKER;
    /// Half the width of an X mark
    pub const MARKER_SIZE: f64 = super::KNIFE_MARKER_SIZE;
    pub const MARKER_WIDTH: f64 = super::KNIFE_MARKER_WIDTH;
}
