// Copyright 2025 the Golddust Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Translation of raw host input into viewport and query changes.
//!
//! Handlers take positions and plain values rather than any particular
//! windowing system's event types, so a browser shim, a native event loop
//! or a test can drive them alike.

use golddust_event_state::drag::DragState;
use golddust_event_state::wheel::WheelDelta;
use golddust_query::{QueryEngine, QueryStatus};
use golddust_scene::SceneModel;
use golddust_view2d::Viewport;
use kurbo::{Point, Vec2};

use crate::config::DEFAULT_ZOOM_STEP;

/// A wheel event as seen by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelInput {
    /// Raw deltas in whichever convention the host reported.
    pub delta: WheelDelta,
    /// Pointer position in client coordinates.
    pub client: Point,
    /// Offset of the render surface inside the client area.
    pub target_offset: Vec2,
}

impl WheelInput {
    /// Zoom anchor in surface coordinates.
    #[must_use]
    pub fn cursor(&self) -> Point {
        self.client - self.target_offset
    }
}

/// What the host should do with the native event after handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventDisposition {
    /// Suppress the native default action (page scrolling).
    pub prevent_default: bool,
    /// Stop the event from reaching ancestors.
    pub stop_propagation: bool,
}

impl EventDisposition {
    /// Fully consumed: no default action, no propagation.
    pub const CONSUMED: Self = Self {
        prevent_default: true,
        stop_propagation: true,
    };
}

/// Response to a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyResponse {
    /// Move keyboard focus to the query input so the key lands there.
    FocusQuery,
    /// Nothing to do; the query input already has focus.
    Ignore,
}

/// Pointer, wheel and keyboard state machine.
#[derive(Clone, Debug)]
pub struct InputController {
    drag: DragState,
    zoom_step: f64,
    query_focused: bool,
}

impl Default for InputController {
    fn default() -> Self {
        Self::new(DEFAULT_ZOOM_STEP)
    }
}

impl InputController {
    /// Creates an idle controller zooming `zoom_step` levels per wheel notch.
    #[must_use]
    pub fn new(zoom_step: f64) -> Self {
        Self {
            drag: DragState::Idle,
            zoom_step,
            query_focused: false,
        }
    }

    /// Current drag state.
    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Zoom levels per wheel notch.
    #[must_use]
    pub fn zoom_step(&self) -> f64 {
        self.zoom_step
    }

    /// Pointer pressed: start panning from the current view.
    pub fn on_pointer_down(&mut self, viewport: &Viewport, pointer: Point) {
        self.drag.start(viewport.pan_offset(), pointer);
    }

    /// Pointer moved: while dragging, set the pan from the drag anchor.
    ///
    /// Returns `true` if the viewport changed.
    pub fn on_pointer_move(&mut self, viewport: &mut Viewport, pointer: Point) -> bool {
        match self.drag.update(pointer) {
            Some(pan) => {
                viewport.set_pan_offset(pan);
                true
            }
            None => false,
        }
    }

    /// Pointer released over the surface.
    pub fn on_pointer_up(&mut self) {
        self.drag.end();
    }

    /// Pointer released outside the surface; same as [`Self::on_pointer_up`].
    pub fn on_pointer_up_outside(&mut self) {
        self.drag.end();
    }

    /// Wheel: zoom one step around the cursor.
    ///
    /// Scrolling down zooms out, scrolling up zooms in. The event is always
    /// consumed so the page does not scroll.
    pub fn on_wheel(&self, viewport: &mut Viewport, input: &WheelInput) -> EventDisposition {
        if let Some(delta) = input.delta.zoom_delta(self.zoom_step) {
            viewport.zoom_by(delta, input.cursor());
        }
        EventDisposition::CONSUMED
    }

    /// Records whether the query input currently has keyboard focus.
    pub fn set_query_focused(&mut self, focused: bool) {
        self.query_focused = focused;
    }

    /// Key pressed anywhere: redirect typing to the query input.
    pub fn on_key_down(&mut self) -> KeyResponse {
        if self.query_focused {
            KeyResponse::Ignore
        } else {
            self.query_focused = true;
            KeyResponse::FocusQuery
        }
    }

    /// Query text changed: rescan the scene.
    pub fn on_query_changed(
        &self,
        query: &mut QueryEngine,
        scene: &mut SceneModel,
        text: &str,
    ) -> QueryStatus {
        query.apply_query(scene, text)
    }
}
