// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer events and the delegate trait tools implement to receive them.
//!
//! Hosts translate their native events (DOM `MouseEvent`, a replayed drag
//! on the command line) into `MouseEvent` and forward them to a delegate
//! together with the surface it should draw on.

use kurbo::Point;

/// Keyboard modifiers held during a pointer event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
}

/// A pointer event in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    pub pos: Point,
    pub mods: Modifiers,
}

impl MouseEvent {
    /// An event at `pos` with no modifiers held
    pub fn new(pos: Point) -> Self {
        Self {
            pos,
            mods: Modifiers::default(),
        }
    }

    /// The same event with shift held
    pub fn with_shift(self) -> Self {
        Self {
            mods: Modifiers { shift: true },
            ..self
        }
    }
}

/// Receiver of pointer events.
///
/// `T` is whatever the delegate needs to act on, typically a renderer.
pub trait MouseDelegate<T: ?Sized> {
    /// Primary button pressed
    fn left_down(&mut self, event: MouseEvent, data: &mut T);

    /// Primary button released
    fn left_up(&mut self, event: MouseEvent, data: &mut T);

    /// Pointer moved, with or without a button held
    fn mouse_moved(&mut self, _event: MouseEvent, _data: &mut T) {}

    /// Abandon the current gesture (pointer left the surface, focus lost)
    fn cancel(&mut self, _data: &mut T) {}
}
