// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Retained scene that serializes to a standalone SVG document

use super::{Renderer, check_outline, hit_marker};
use crate::config::Config;
use crate::error::Result;
use crate::model::polygon::closed_outline;
use crate::theme;
use kurbo::{Line, Point};
use std::fmt;

/// One closed outline in the scene
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    pub points: Vec<Point>,
    pub color: String,
}

/// In-memory scene, printed as SVG with `Display`
#[derive(Debug, Clone)]
pub struct SvgScene {
    width: f64,
    height: f64,
    knife_color: String,
    marker_color: String,
    outlines: Vec<Outline>,
    knife: Option<Line>,
    markers: Vec<Point>,
}

impl SvgScene {
    /// Empty scene of the given size
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            knife_color: theme::knife::LINE_COLOR.to_string(),
            marker_color: theme::knife::MARKER_COLOR.to_string(),
            outlines: Vec::new(),
            knife: None,
            markers: Vec::new(),
        }
    }

    /// Empty scene sized and colored from `config`
    pub fn from_config(config: &Config) -> Self {
        Self {
            knife_color: config.colors.knife.clone(),
            marker_color: config.colors.marker.clone(),
            ..Self::new(config.canvas.width, config.canvas.height)
        }
    }

    /// Outlines in drawing order
    pub fn outlines(&self) -> &[Outline] {
        &self.outlines
    }

    /// The knife line, if one is shown
    pub fn knife(&self) -> Option<Line> {
        self.knife
    }

    /// Centers of the crossing markers currently shown
    pub fn markers(&self) -> &[Point] {
        &self.markers
    }
}

impl Renderer for SvgScene {
    fn render_polygon(&mut self, points: &[Point], color: &str) -> Result<()> {
        check_outline(points)?;
        self.outlines.push(Outline {
            points: points.to_vec(),
            color: color.to_string(),
        });
        Ok(())
    }

    fn clear_scene(&mut self) {
        self.outlines.clear();
        self.knife = None;
        self.markers.clear();
    }

    fn render_feedback_line(&mut self, start: Point, end: Point) {
        self.knife = Some(Line::new(start, end));
    }

    fn render_hit_markers(&mut self, points: &[Point]) {
        self.markers = points.to_vec();
    }
}

impl fmt::Display for SvgScene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" fill="transparent">"#,
            self.width, self.height
        )?;
        for outline in &self.outlines {
            writeln!(
                f,
                r#"  <path d="{}" stroke="{}" stroke-width="{}"/>"#,
                closed_outline(&outline.points).to_svg(),
                outline.color,
                theme::outline::WIDTH
            )?;
        }
        if let Some(line) = self.knife {
            writeln!(
                f,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                line.p0.x,
                line.p0.y,
                line.p1.x,
                line.p1.y,
                self.knife_color,
                theme::knife::LINE_WIDTH
            )?;
        }
        for &at in &self.markers {
            writeln!(
                f,
                r#"  <path d="{}" stroke="{}" stroke-width="{}"/>"#,
                hit_marker(at).to_svg(),
                self.marker_color,
                theme::knife::MARKER_WIDTH
            )?;
        }
        write!(f, "</svg>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn too_few_points_is_rejected() {
        let mut scene = SvgScene::new(100.0, 100.0);
        let err = scene.render_polygon(&[Point::new(1.0, 1.0)], "red");
        assert_eq!(err, Err(Error::NotEnoughPoints { count: 1 }));
        assert!(scene.outlines().is_empty());
    }

    #[test]
    fn two_points_are_enough() {
        let mut scene = SvgScene::new(100.0, 100.0);
        let pts = [Point::new(0.0, 0.0), Point::new(5.0, 5.0)];
        assert!(scene.render_polygon(&pts, "red").is_ok());
        assert_eq!(scene.outlines().len(), 1);
    }

    #[test]
    fn feedback_line_is_replaced_not_stacked() {
        let mut scene = SvgScene::new(100.0, 100.0);
        scene.render_feedback_line(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        scene.render_feedback_line(Point::new(0.0, 0.0), Point::new(9.0, 9.0));
        assert_eq!(
            scene.knife(),
            Some(Line::new(Point::new(0.0, 0.0), Point::new(9.0, 9.0)))
        );
    }

    #[test]
    fn clear_removes_everything() {
        let mut scene = SvgScene::new(100.0, 100.0);
        let pts = [Point::new(0.0, 0.0), Point::new(5.0, 5.0), Point::new(0.0, 5.0)];
        scene.render_polygon(&pts, "red").unwrap();
        scene.render_feedback_line(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        scene.render_hit_markers(&[Point::new(1.0, 1.0)]);
        scene.clear_scene();
        assert!(scene.outlines().is_empty());
        assert_eq!(scene.knife(), None);
        assert!(scene.markers().is_empty());
    }

    #[test]
    fn markers_are_replaced_and_drawn_as_crosses() {
        let mut scene = SvgScene::new(100.0, 100.0);
        scene.render_hit_markers(&[Point::new(1.0, 1.0), Point::new(2.0, 2.0)]);
        scene.render_hit_markers(&[Point::new(50.0, 50.0)]);
        assert_eq!(scene.markers(), &[Point::new(50.0, 50.0)]);

        let doc = scene.to_string();
        assert_eq!(doc.matches(r##"stroke="#6ae756""##).count(), 1);
        assert_eq!(doc.matches("<path").count(), 1);

        scene.render_hit_markers(&[]);
        assert!(!scene.to_string().contains("#6ae756"));
    }

    #[test]
    fn document_contains_paths_and_line() {
        let mut scene = SvgScene::new(500.0, 400.0);
        let pts = [Point::new(0.0, 0.0), Point::new(5.0, 5.0), Point::new(0.0, 5.0)];
        scene.render_polygon(&pts, "blue").unwrap();
        scene.render_feedback_line(Point::new(1.0, 2.0), Point::new(3.0, 4.0));

        let doc = scene.to_string();
        assert!(doc.starts_with("<svg"));
        assert!(doc.contains(r#"width="500" height="400""#));
        assert!(doc.contains(r#"stroke="blue""#));
        assert!(doc.contains(r#"x1="1" y1="2" x2="3" y2="4""#));
        assert!(doc.ends_with("</svg>"));
        assert_eq!(doc.matches("<path").count(), 1);
    }
}
