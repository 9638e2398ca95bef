// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end: replay one knife drag and print the result

use crate::config::Config;
use crate::editing::{MouseDelegate, MouseEvent};
use crate::render::SvgScene;
use crate::split::Split;
use crate::tools::KnifeTool;
use anyhow::{Context, Result, bail};
use kurbo::Point;
use serde::Serialize;
use std::path::PathBuf;

pub const USAGE: &str = "Usage: polysplit [--config FILE] [--json] [--shift] X1 Y1 X2 Y2";

/// Parsed command-line arguments
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    /// Print the split as JSON instead of an SVG document
    pub json: bool,
    /// Hold shift while pressing (axis-locked cut)
    pub shift: bool,
    pub start: Point,
    pub end: Point,
}

/// What `--json` prints
#[derive(Debug, Serialize)]
struct CutReport<'a> {
    start: Point,
    end: Point,
    split: Option<&'a Split>,
}

impl CliArgs {
    /// Parse arguments (without the program name).
    ///
    /// Errors carry the usage line as context.
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        Self::parse_args(args).context(USAGE)
    }

    fn parse_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = None;
        let mut json = false;
        let mut shift = false;
        let mut coords = Vec::with_capacity(4);

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let path = args.next().context("--config needs a file path")?;
                    config = Some(PathBuf::from(path));
                }
                "--json" => json = true,
                "--shift" => shift = true,
                _ => {
                    let value: f64 = arg
                        .parse()
                        .with_context(|| format!("Invalid coordinate '{}'", arg))?;
                    coords.push(value);
                }
            }
        }

        let [x1, y1, x2, y2] = coords[..] else {
            bail!("Expected 4 coordinates, got {}", coords.len());
        };

        Ok(Self {
            config,
            json,
            shift,
            start: Point::new(x1, y1),
            end: Point::new(x2, y2),
        })
    }
}

/// Replay the drag described by `args` and render the output text
pub fn run(args: &CliArgs) -> Result<String> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let mut tool = KnifeTool::from_config(&config);
    let mut scene = SvgScene::from_config(&config);
    tool.setup(&mut scene);

    let mut down = MouseEvent::new(args.start);
    if args.shift {
        down = down.with_shift();
    }
    tool.left_down(down, &mut scene);
    tool.mouse_moved(MouseEvent::new(args.end), &mut scene);
    let line = tool
        .drag()
        .map(|drag| drag.line())
        .context("Knife drag did not start")?;
    let split = tool.pointer_up(args.end, &mut scene);

    if args.json {
        let report = CutReport {
            start: line.p0,
            end: line.p1,
            split: split.as_ref(),
        };
        serde_json::to_string_pretty(&report).context("Failed to serialize cut")
    } else {
        Ok(scene.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Result<CliArgs> {
        CliArgs::parse(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn parses_coordinates_and_flags() {
        let parsed = args(&["--json", "50", "150", "--shift", "450", "150.5"]).unwrap();
        assert_eq!(
            parsed,
            CliArgs {
                config: None,
                json: true,
                shift: true,
                start: Point::new(50.0, 150.0),
                end: Point::new(450.0, 150.5),
            }
        );
    }

    #[test]
    fn parses_config_path() {
        let parsed = args(&["--config", "cut.toml", "0", "0", "1", "1"]).unwrap();
        assert_eq!(parsed.config, Some(PathBuf::from("cut.toml")));
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(args(&["1", "2", "3"]).is_err());
        assert!(args(&["1", "2", "3", "4", "5"]).is_err());
        assert!(args(&["1", "2", "three", "4"]).is_err());
        assert!(args(&["--config"]).is_err());
    }

    #[test]
    fn errors_mention_usage_and_cause() {
        let err = args(&["1", "2", "three", "4"]).unwrap_err();
        assert!(err.to_string().starts_with("Usage: polysplit"));
        assert!(format!("{:#}", err).contains("Invalid coordinate 'three'"));
    }

    #[test]
    fn svg_output_has_two_halves() {
        let out = run(&args(&["50", "150", "450", "150"]).unwrap()).unwrap();
        assert!(out.starts_with("<svg"));
        assert_eq!(out.matches("<path").count(), 2);
        assert!(out.contains(r#"stroke="blue""#));
        assert!(out.contains(r#"stroke="green""#));
        assert!(!out.contains("<line"));
    }

    #[test]
    fn svg_output_falls_back_to_original() {
        let out = run(&args(&["0", "0", "10", "10"]).unwrap()).unwrap();
        assert_eq!(out.matches("<path").count(), 1);
        assert!(out.contains(r#"stroke="black""#));
    }

    #[test]
    fn json_output_reports_split() {
        let out = run(&args(&["--json", "--shift", "50", "150", "450", "170"]).unwrap()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["end"]["y"], 150.0);
        assert_eq!(value["split"]["first"].as_array().unwrap().len(), 5);
        assert_eq!(value["split"]["second"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn json_output_reports_missing_split() {
        let out = run(&args(&["--json", "0", "0", "10", "10"]).unwrap()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value["split"].is_null());
    }
}
