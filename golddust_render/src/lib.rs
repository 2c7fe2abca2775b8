// Copyright 2025 the Golddust Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Golddust Render: keeps rendered primitives in step with the scene.
//!
//! # Position in the stack
//!
//! - **Scene** (`golddust_scene`): entries, match flags, handle slots.
//! - **Sync (this crate)**: [`RenderSync`] decides what the backend should
//!   show for the current scene, viewport and match state.
//! - **Backends**: anything implementing [`SceneBackend`], from a GPU
//!   scene graph to the recording backend in `golddust_render_ref`.
//!
//! # Strategy
//!
//! Point geometry is drawn in two batched fill passes per update:
//! unmatched points first, matched points second, so highlighted points are
//! always on top regardless of load order. Labels are individual
//! primitives, one per entry, because their text and placement are
//! inherently per entry. Matched labels are restacked above unmatched ones
//! whenever the match state is recomputed.
//!
//! The whole scene lives in one layer scaled by `2^scale`. Point radii and
//! label scales are counter-scaled by `2^(-scale)`, so points and text keep
//! a constant on-screen size while the spacing between them grows with the
//! zoom, which keeps dense clusters legible.
//!
//! [`RenderSync`] is the only component that creates or destroys backend
//! primitives.

mod backend;
mod style;
mod sync;

pub use backend::{LabelDesc, PointBatch, SceneBackend};
pub use peniko::{BlendMode, Color};
pub use style::{PointShape, PointStyle, RenderStyle, TextStyle};
pub use sync::{RenderSync, SyncReport};
