// Copyright 2025 the Golddust Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan drag state: resolve absolute pan offsets from a pointer anchor.
//!
//! ## Usage
//!
//! 1) On pointer-down call [`DragState::start`] with the current pan offset
//!    and pointer position.
//! 2) On each pointer-move call [`DragState::update`]; it returns the pan
//!    offset the view should adopt, or `None` when no drag is active.
//! 3) On pointer-up (inside or outside the surface) call [`DragState::end`].
//!
//! The pan is always recomputed from the anchor rather than accumulated
//! from per-move deltas, so rounding never builds up over a long drag.

use kurbo::{Point, Vec2};

/// Lifecycle of a pan gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    /// No pointer button is held.
    #[default]
    Idle,
    /// A pointer went down and has not been released yet.
    Dragging {
        /// Pan offset at the moment the pointer went down.
        anchor_pan_offset: Vec2,
        /// Pointer position at the moment the pointer went down.
        anchor_pointer: Point,
    },
}

impl DragState {
    /// Start a drag from `pointer` while the view is at `pan_offset`.
    ///
    /// Starting while already dragging re-anchors the gesture.
    pub fn start(&mut self, pan_offset: Vec2, pointer: Point) {
        *self = Self::Dragging {
            anchor_pan_offset: pan_offset,
            anchor_pointer: pointer,
        };
    }

    /// Returns the pan offset for a pointer at `pointer`, or `None` when idle.
    #[must_use]
    pub fn update(&self, pointer: Point) -> Option<Vec2> {
        match *self {
            Self::Idle => None,
            Self::Dragging {
                anchor_pan_offset,
                anchor_pointer,
            } => Some(anchor_pan_offset + (pointer - anchor_pointer)),
        }
    }

    /// End the current drag, returning `true` if one was active.
    pub fn end(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        *self = Self::Idle;
        was_dragging
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}
