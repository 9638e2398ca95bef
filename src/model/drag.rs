// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! The line being drawn by an in-progress drag

use kurbo::{Line, Point};

/// Endpoints of the current drag.
///
/// A fresh value is created on pointer-down; every move produces a new
/// value rather than mutating the old one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Where the pointer went down
    pub start: Point,
    /// Latest pointer position, `None` until the first move
    pub end: Option<Point>,
    /// Constrain the line to horizontal or vertical
    pub axis_locked: bool,
}

impl DragState {
    /// Start a drag at `start`
    pub fn begin(start: Point, axis_locked: bool) -> Self {
        Self {
            start,
            end: None,
            axis_locked,
        }
    }

    /// A copy of this drag with the end moved to `end`
    pub fn with_end(self, end: Point) -> Self {
        Self {
            end: Some(end),
            ..self
        }
    }

    /// The effective end point, applying the axis lock if active
    pub fn current_end(&self) -> Point {
        let Some(mut end) = self.end else {
            return self.start;
        };
        if self.axis_locked {
            let delta = end - self.start;
            if delta.x.abs() > delta.y.abs() {
                end.y = self.start.y;
            } else {
                end.x = self.start.x;
            }
        }
        end
    }

    /// The drawn segment from start to the effective end
    pub fn line(&self) -> Line {
        Line::new(self.start, self.current_end())
    }
}
