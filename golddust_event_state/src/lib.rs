// Copyright 2025 the Golddust Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Golddust Event State: small state managers for viewer input.
//!
//! - [`drag`]: the pan gesture lifecycle (`Idle` ↔ `Dragging`), resolving
//!   absolute pan offsets from the pointer anchor.
//! - [`wheel`]: normalization of the three wheel delta conventions seen in
//!   the wild into a single zoom direction.
//!
//! Both managers accept raw positions and numbers rather than any
//! particular windowing system's event types. The caller decides what to do
//! with the result (typically feed it into `golddust_view2d::Viewport`).
//!
//! ### Drag
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use golddust_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Vec2::new(100.0, 50.0), Point::new(10.0, 10.0));
//!
//! // Moving the pointer by (5, -3) yields the new absolute pan offset.
//! let pan = drag.update(Point::new(15.0, 7.0)).unwrap();
//! assert_eq!(pan, Vec2::new(105.0, 47.0));
//!
//! drag.end();
//! assert!(!drag.is_dragging());
//! ```
//!
//! ### Wheel
//!
//! ```rust
//! use golddust_event_state::wheel::{WheelDelta, ZoomDirection};
//!
//! // Legacy WebKit events report the inverted sign.
//! let legacy = WheelDelta { wheel_delta_y: Some(120.0), ..WheelDelta::default() };
//! assert_eq!(legacy.zoom_direction(), Some(ZoomDirection::In));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
pub mod wheel;
