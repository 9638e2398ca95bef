// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Closed polygon stored as an ordered vertex list.
//!
//! The closing edge is implicit: edge `i` runs from vertex `i` to vertex
//! `(i + 1) % n`, so the first vertex is never repeated at the end.

use crate::error::{Error, Result};
use kurbo::{BezPath, Line, Point};
use serde::{Deserialize, Serialize};

/// A simple polygon with at least three vertices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Minimum vertex count for a polygon
    pub const MIN_VERTICES: usize = 3;

    /// Create a polygon from its vertices in edge order
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() < Self::MIN_VERTICES {
            return Err(Error::TooFewVertices {
                count: points.len(),
            });
        }
        Ok(Self { points })
    }

    /// The vertices, without a closing duplicate
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of vertices (and edges)
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether there are no vertices; never true once constructed
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Edge `index`, wrapping the last vertex back to the first
    pub fn edge(&self, index: usize) -> Line {
        let n = self.points.len();
        Line::new(self.points[index % n], self.points[(index + 1) % n])
    }

    /// Iterate over all edges, the closing edge last
    pub fn edges(&self) -> impl Iterator<Item = Line> + '_ {
        (0..self.points.len()).map(|i| self.edge(i))
    }

    /// Closed outline path through the vertices
    pub fn to_bez_path(&self) -> BezPath {
        closed_outline(&self.points)
    }
}

impl Default for Polygon {
    /// The built-in heptagon
    fn default() -> Self {
        Self {
            points: crate::settings::default_polygon(),
        }
    }
}

impl TryFrom<Vec<Point>> for Polygon {
    type Error = Error;

    fn try_from(points: Vec<Point>) -> Result<Self> {
        Self::new(points)
    }
}

impl From<Polygon> for Vec<Point> {
    fn from(polygon: Polygon) -> Self {
        polygon.points
    }
}

/// Build a closed path through `points` in order.
///
/// Returns an empty path for an empty slice.
pub fn closed_outline(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some((&first, rest)) = points.split_first() else {
        return path;
    };
    path.move_to(first);
    for &pt in rest {
        path.line_to(pt);
    }
    path.close_path();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn triangle() -> Polygon {
        Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_fewer_than_three_vertices() {
        let err = Polygon::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        assert_eq!(err, Err(Error::TooFewVertices { count: 2 }));
        assert!(Polygon::new(Vec::new()).is_err());
    }

    #[test]
    fn closing_edge_wraps_to_first_vertex() {
        let tri = triangle();
        let edges: Vec<Line> = tri.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2].p0, Point::new(0.0, 10.0));
        assert_eq!(edges[2].p1, Point::new(0.0, 0.0));
    }

    #[test]
    fn outline_is_closed() {
        let svg = triangle().to_bez_path().to_svg();
        assert!(svg.starts_with('M'));
        assert!(svg.ends_with('Z'));
        assert_eq!(svg.matches('L').count(), 2);
    }

    #[test]
    fn default_is_the_heptagon() {
        let poly = Polygon::default();
        assert_eq!(poly.len(), 7);
        assert_eq!(poly.points()[3], Point::new(400.0, 200.0));
    }

    #[test]
    fn empty_outline_has_no_elements() {
        assert!(closed_outline(&[]).elements().is_empty());
    }

    #[test]
    fn deserialize_validates_vertex_count() {
        let ok: Polygon =
            serde_json::from_str(r#"[{"x":0,"y":0},{"x":4,"y":0},{"x":0,"y":3}]"#).unwrap();
        assert_eq!(ok.len(), 3);

        let bad = serde_json::from_str::<Polygon>(r#"[{"x":0,"y":0}]"#);
        assert!(bad.is_err());
    }
}
