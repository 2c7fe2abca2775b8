// Copyright 2025 the Golddust Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Golddust View 2D: the pan + exponential zoom viewport.
//!
//! This crate provides a small, headless model of the view over a 2D point
//! cloud. It focuses on:
//! - Viewport state: a pan offset in screen space and a zoom *level*
//!   expressed in log2 units (the linear scale is `2^scale`).
//! - Coordinate conversion between data space and screen space.
//! - Cursor-anchored zoom that keeps the data point under the cursor fixed.
//!
//! It does **not** own any scene or rendering backend. Callers are
//! expected to:
//! - Keep their own scene and push [`Viewport::layer_transform`] onto the
//!   top-level layer that holds it.
//! - Wire pointer and wheel events into [`Viewport::pan`],
//!   [`Viewport::set_pan_offset`] and [`Viewport::zoom_by`] at a higher layer.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use golddust_view2d::Viewport;
//!
//! let mut view = Viewport::new();
//! // The stage origin sits in the centre of an 800x600 surface.
//! view.resize(Size::new(800.0, 600.0));
//!
//! // Zoom in one level around the cursor.
//! let cursor = Point::new(120.0, 80.0);
//! let under_cursor = view.to_data(cursor);
//! view.zoom_by(1.0, cursor);
//!
//! let back = view.to_screen(under_cursor);
//! assert!((back - cursor).hypot() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - Zoom is uniform and unbounded: `scale` is never clamped.
//! - The pan offset is measured from the stage origin, which the host
//!   recentres on every resize.
//! - Rotation is intentionally left out.

mod viewport;

pub use viewport::{DEFAULT_SCALE, Viewport, ViewportDebugInfo};
