// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Splitting a polygon along a drawn segment
//!
//! The segment is tested against every edge (the closing edge included).
//! The vertex walk then routes each vertex into one of two output
//! outlines depending on how many cuts have been passed so far. A split
//! exists only when at least two edges are crossed; when more are crossed
//! only the first two in vertex order are used.
//!
//! Parallel and collinear edges never count as crossings, and a cut that
//! passes exactly through a vertex is reported by both adjacent edges.

use crate::model::Polygon;
use kurbo::{Line, Point};
use serde::Serialize;

/// Where the drawn segment crosses one polygon edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Index of the crossed edge (starts at vertex `edge`)
    pub edge: usize,
    /// Parametric position along the drawn segment (0.0 to 1.0)
    pub segment_t: f64,
    /// Parametric position along the edge (0.0 to 1.0)
    pub edge_t: f64,
    /// The intersection point
    pub point: Point,
}

/// The two halves of a split polygon
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Split {
    /// Vertices before the first cut and after the second, plus both cuts
    pub first: Vec<Point>,
    /// Both cuts and the vertices between them
    pub second: Vec<Point>,
}

/// Which output outline receives the next vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CutPhase {
    BeforeFirstCut,
    BetweenCuts,
    AfterSecondCut,
}

/// Intersect the drawn `segment` with a polygon `edge`.
///
/// Returns `(segment_t, edge_t)` when the two finite segments meet. An
/// exactly zero determinant means the lines are parallel (or collinear)
/// and yields no intersection.
pub fn intersect_segments(segment: Line, edge: Line) -> Option<(f64, f64)> {
    let d = segment.p1 - segment.p0;
    let e = edge.p1 - edge.p0;
    let offset = segment.p0 - edge.p0;

    let delta0 = e.y * d.x - e.x * d.y;
    if delta0 == 0.0 {
        return None;
    }

    let delta1 = e.x * offset.y - e.y * offset.x;
    let delta2 = d.x * offset.y - d.y * offset.x;

    let segment_t = delta1 / delta0;
    let edge_t = delta2 / delta0;

    if (0.0..=1.0).contains(&segment_t) && (0.0..=1.0).contains(&edge_t) {
        Some((segment_t, edge_t))
    } else {
        None
    }
}

fn edge_hit(edge: usize, edge_line: Line, segment: Line) -> Option<Hit> {
    let (segment_t, edge_t) = intersect_segments(segment, edge_line)?;
    let d = segment.p1 - segment.p0;
    Some(Hit {
        edge,
        segment_t,
        edge_t,
        point: segment.p0 + d * segment_t,
    })
}

/// All crossings of `segment` with the polygon boundary, in edge order
pub fn edge_hits(polygon: &Polygon, segment: Line) -> Vec<Hit> {
    polygon
        .edges()
        .enumerate()
        .filter_map(|(i, edge)| edge_hit(i, edge, segment))
        .collect()
}

/// Split `polygon` in two along `segment`.
///
/// Returns `None` when the segment crosses fewer than two edges.
pub fn split_polygon(polygon: &Polygon, segment: Line) -> Option<Split> {
    let mut first = Vec::with_capacity(polygon.len() + 2);
    let mut second = Vec::with_capacity(polygon.len() + 2);
    let mut phase = CutPhase::BeforeFirstCut;

    for (i, &vertex) in polygon.points().iter().enumerate() {
        let hit = match phase {
            CutPhase::AfterSecondCut => None,
            _ => edge_hit(i, polygon.edge(i), segment),
        };

        match (phase, hit) {
            (CutPhase::BeforeFirstCut, None) | (CutPhase::AfterSecondCut, _) => {
                first.push(vertex);
            }
            (CutPhase::BeforeFirstCut, Some(hit)) => {
                tracing::debug!("First cut on edge {} at {:?}", i, hit.point);
                first.push(vertex);
                first.push(hit.point);
                second.push(hit.point);
                phase = CutPhase::BetweenCuts;
            }
            (CutPhase::BetweenCuts, None) => {
                second.push(vertex);
            }
            (CutPhase::BetweenCuts, Some(hit)) => {
                tracing::debug!("Second cut on edge {} at {:?}", i, hit.point);
                second.push(vertex);
                second.push(hit.point);
                first.push(hit.point);
                phase = CutPhase::AfterSecondCut;
            }
        }
    }

    if phase != CutPhase::AfterSecondCut {
        tracing::debug!("Segment {:?} does not cross the polygon twice", segment);
        return None;
    }

    tracing::debug!("Half one has {} points", first.len());
    tracing::debug!("Half two has {} points", second.len());

    Some(Split { first, second })
}
