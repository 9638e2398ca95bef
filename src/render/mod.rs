// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Rendering boundary
//!
//! The knife tool only talks to a `Renderer`; the concrete surface (an
//! in-memory SVG document, or the browser DOM with the `web` feature)
//! lives behind it.

pub mod svg;

use crate::error::Result;
use crate::theme;
use kurbo::{BezPath, Point, Vec2};

pub use svg::SvgScene;

/// A drawing surface for polygon outlines and the knife line
pub trait Renderer {
    /// Draw a closed outline through `points` in order.
    ///
    /// Fails with `Error::NotEnoughPoints` for fewer than two points, in
    /// which case nothing is drawn.
    fn render_polygon(&mut self, points: &[Point], color: &str) -> Result<()>;

    /// Remove every outline, the knife line and the hit markers
    fn clear_scene(&mut self);

    /// Draw the knife line, replacing any previous one
    fn render_feedback_line(&mut self, start: Point, end: Point);

    /// Mark where the knife line crosses the outline, replacing any
    /// previous marks. An empty slice removes them.
    fn render_hit_markers(&mut self, points: &[Point]);
}

/// Check the outline precondition shared by all renderers
pub(crate) fn check_outline(points: &[Point]) -> Result<()> {
    if points.len() < 2 {
        return Err(crate::Error::NotEnoughPoints {
            count: points.len(),
        });
    }
    Ok(())
}

/// An X centered on `at`, as two open strokes
pub(crate) fn hit_marker(at: Point) -> BezPath {
    let size = theme::knife::MARKER_SIZE;
    let mut path = BezPath::new();
    path.move_to(at - Vec2::new(size, size));
    path.line_to(at + Vec2::new(size, size));
    path.move_to(at + Vec2::new(-size, size));
    path.line_to(at + Vec2::new(size, -size));
    path
}
