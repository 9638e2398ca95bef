// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Interactive tools

pub mod knife;

pub use knife::KnifeTool;
