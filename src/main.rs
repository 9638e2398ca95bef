// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Polysplit: cut a polygon in two by dragging a line across it

fn main() -> anyhow::Result<()> {
    polysplit::run()
}
