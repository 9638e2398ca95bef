// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! The knife tool for cutting the polygon
//!
//! Press to start the cut, drag to aim it, release to split. While the
//! button is held the knife line follows the pointer; holding shift on
//! press locks the line to horizontal or vertical. On release the scene is
//! redrawn with either the two halves or, if the line does not cross the
//! outline twice, the untouched polygon.
//!
//! There is no timeout for a lost release: hosts should call `cancel` when
//! the pointer leaves the surface.

use crate::config::{ColorConfig, Config};
use crate::editing::{MouseDelegate, MouseEvent};
use crate::model::{DragState, Polygon};
use crate::render::Renderer;
use crate::split::{Hit, Split, edge_hits, split_polygon};
use kurbo::Point;

/// The knife tool
#[derive(Debug, Clone)]
pub struct KnifeTool {
    /// The shape being cut; never modified
    polygon: Polygon,
    colors: ColorConfig,
    /// Current gesture state
    gesture: GestureState,
    /// Cached crossings of the current knife line
    hits: Vec<Hit>,
}

/// The state of the knife gesture
#[derive(Debug, Clone, Copy, PartialEq)]
enum GestureState {
    /// Ready for a new cut
    Ready,
    /// Button held, line being aimed
    Begun(DragState),
}

impl KnifeTool {
    /// A knife for `polygon`, drawing with `colors`
    pub fn new(polygon: Polygon, colors: ColorConfig) -> Self {
        Self {
            polygon,
            colors,
            gesture: GestureState::Ready,
            hits: Vec::new(),
        }
    }

    /// A knife for the polygon and colors in `config`
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.polygon.clone(), config.colors.clone())
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Whether a cut is in progress
    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, GestureState::Begun(_))
    }

    /// The in-progress drag, if any
    pub fn drag(&self) -> Option<DragState> {
        match self.gesture {
            GestureState::Begun(drag) => Some(drag),
            GestureState::Ready => None,
        }
    }

    /// Where the current knife line crosses the outline
    pub fn preview_hits(&self) -> &[Hit] {
        &self.hits
    }

    /// Clear the surface and draw the uncut polygon
    pub fn setup<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        self.gesture = GestureState::Ready;
        self.hits.clear();
        renderer.clear_scene();
        self.draw_original(renderer);
    }

    /// Pointer pressed at `pos`
    pub fn pointer_down<R: Renderer + ?Sized>(&mut self, pos: Point, renderer: &mut R) {
        self.left_down(MouseEvent::new(pos), renderer);
    }

    /// Pointer moved to `pos`; ignored unless a cut is in progress
    pub fn pointer_move<R: Renderer + ?Sized>(&mut self, pos: Point, renderer: &mut R) {
        self.mouse_moved(MouseEvent::new(pos), renderer);
    }

    /// Pointer released at `pos`, finishing the cut.
    ///
    /// Returns the split that was drawn, or `None` if the polygon was left
    /// whole (including when no cut was in progress).
    pub fn pointer_up<R: Renderer + ?Sized>(
        &mut self,
        pos: Point,
        renderer: &mut R,
    ) -> Option<Split> {
        let GestureState::Begun(drag) = self.gesture else {
            tracing::debug!("Pointer up at {:?} with no cut in progress", pos);
            return None;
        };

        let line = drag.with_end(pos).line();
        self.gesture = GestureState::Ready;
        self.hits.clear();

        let split = split_polygon(&self.polygon, line);

        renderer.clear_scene();
        match &split {
            Some(split) => {
                tracing::info!(
                    "Cut {:?} -> {:?} split the polygon into {} + {} points",
                    line.p0,
                    line.p1,
                    split.first.len(),
                    split.second.len()
                );
                draw(renderer, &split.first, &self.colors.first_half);
                draw(renderer, &split.second, &self.colors.second_half);
            }
            None => {
                tracing::info!("Cut {:?} -> {:?} did not split the polygon", line.p0, line.p1);
                self.draw_original(renderer);
            }
        }

        split
    }

    fn draw_original<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        draw(renderer, self.polygon.points(), &self.colors.original);
    }

    fn update_hits(&mut self, drag: &DragState) {
        self.hits = edge_hits(&self.polygon, drag.line());
    }

    fn draw_hits<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        let points: Vec<Point> = self.hits.iter().map(|hit| hit.point).collect();
        renderer.render_hit_markers(&points);
    }
}

/// Draw an outline, reporting rather than propagating a refusal
fn draw<R: Renderer + ?Sized>(renderer: &mut R, points: &[Point], color: &str) {
    if let Err(e) = renderer.render_polygon(points, color) {
        tracing::error!("Skipping {} outline: {}", color, e);
    }
}

// ===== MouseDelegate Implementation =====

impl<R: Renderer + ?Sized> MouseDelegate<R> for KnifeTool {
    fn left_down(&mut self, event: MouseEvent, renderer: &mut R) {
        if self.is_dragging() {
            tracing::warn!("Pointer down during a cut; starting over");
        }
        let drag = DragState::begin(event.pos, event.mods.shift);
        self.gesture = GestureState::Begun(drag);
        self.hits.clear();
        renderer.render_feedback_line(drag.start, drag.current_end());
        self.draw_hits(renderer);
    }

    fn mouse_moved(&mut self, event: MouseEvent, renderer: &mut R) {
        if let GestureState::Begun(drag) = self.gesture {
            let drag = drag.with_end(event.pos);
            self.gesture = GestureState::Begun(drag);
            self.update_hits(&drag);
            renderer.render_feedback_line(drag.start, drag.current_end());
            self.draw_hits(renderer);
        }
    }

    fn left_up(&mut self, event: MouseEvent, renderer: &mut R) {
        self.pointer_up(event.pos, renderer);
    }

    fn cancel(&mut self, renderer: &mut R) {
        if self.is_dragging() {
            tracing::debug!("Knife cut cancelled");
            self.setup(renderer);
        }
    }
}
