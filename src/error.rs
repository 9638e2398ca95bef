// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Library error type

use thiserror::Error;

/// Errors raised by the polygon model and renderers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A polygon needs at least three vertices to enclose an area
    #[error("a polygon needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    /// An outline needs at least two points to be drawn
    #[error("not enough points to render an outline: {count}")]
    NotEnoughPoints { count: usize },

    /// The drawing surface refused the shape
    #[error("drawing surface error: {0}")]
    Surface(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
