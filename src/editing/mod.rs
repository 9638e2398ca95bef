// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer input model

pub mod mouse;

pub use mouse::{Modifiers, MouseDelegate, MouseEvent};
