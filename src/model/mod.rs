// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Geometry data model

pub mod drag;
pub mod polygon;

pub use drag::DragState;
pub use polygon::Polygon;
