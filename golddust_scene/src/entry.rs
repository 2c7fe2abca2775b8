// Copyright 2025 the Golddust Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Identifier for a rendered label primitive.
///
/// This is a small, opaque handle that is stable for the lifetime of the
/// primitive. Backends allocate them; the scene only stores them.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct VisualHandle(pub u32);

/// Position of an entry in load order.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub usize);

/// One labeled data point.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    position: Point,
    label: String,
    matched: bool,
    visual: Option<VisualHandle>,
}

impl Entry {
    pub(crate) fn new(position: Point, label: String) -> Self {
        Self {
            position,
            label,
            matched: false,
            visual: None,
        }
    }

    /// Data-space position.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Label text.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the current query matches this entry's label.
    #[must_use]
    pub fn matched(&self) -> bool {
        self.matched
    }

    /// Handle of the rendered label, once the renderer has built it.
    #[must_use]
    pub fn visual(&self) -> Option<VisualHandle> {
        self.visual
    }

    pub(crate) fn set_matched(&mut self, matched: bool) -> bool {
        let changed = self.matched != matched;
        self.matched = matched;
        changed
    }

    pub(crate) fn set_visual(&mut self, visual: Option<VisualHandle>) -> Option<VisualHandle> {
        core::mem::replace(&mut self.visual, visual)
    }
}
