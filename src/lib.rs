// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Polysplit: cut a polygon in two by dragging a line across it

pub mod cli;
pub mod config;
pub mod editing;
pub mod error;
pub mod model;
pub mod render;
pub mod settings;
pub mod split;
pub mod theme;
pub mod tools;
#[cfg(feature = "web")]
pub mod web;

pub use error::Error;
pub use model::{DragState, Polygon};
pub use render::Renderer;
pub use split::{Split, split_polygon};
pub use tools::KnifeTool;

/// Entry point for the command-line application
pub fn run() -> anyhow::Result<()> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var).
    // Logs go to stderr; stdout carries the SVG or JSON output.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(settings::logging::DIRECTIVE.parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::CliArgs::parse(std::env::args().skip(1))?;

    let output = cli::run(&args)?;
    println!("{}", output);
    Ok(())
}
