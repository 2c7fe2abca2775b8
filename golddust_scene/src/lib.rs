// Copyright 2025 the Golddust Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Golddust Scene: the logical model behind the point-cloud view.
//!
//! A [`SceneModel`] is an ordered collection of [`Entry`] values, one per
//! data point. Each entry carries an immutable data-space position and
//! label, a mutable match flag, and a slot for the [`VisualHandle`] of its
//! rendered label.
//!
//! The model never touches visuals itself. Handles are bound and retired
//! through a narrow API intended for the render synchronizer, which is the
//! only component that creates or destroys rendering resources.
//!
//! ## Loading
//!
//! ```rust
//! use golddust_scene::SceneModel;
//!
//! let json = br#"[{"x": 0.5, "y": -1.0, "word": "cat"}, {"x": 2, "y": 3, "word": "dog"}]"#;
//! let mut scene = SceneModel::new();
//! scene.load_json(json, None).unwrap();
//!
//! assert_eq!(scene.len(), 2);
//! let labels: Vec<&str> = scene.iter().map(|(_, e)| e.label()).collect();
//! assert_eq!(labels, ["cat", "dog"]);
//! ```
//!
//! ## Match epoch
//!
//! Every full recompute of the match flags should be followed by
//! [`SceneModel::bump_match_epoch`]. Renderers compare the epoch against
//! the last one they saw to decide when labels need restacking.

mod dataset;
mod entry;
mod model;

pub use dataset::{DEFAULT_DATASET_NAME, LoadError, Record, parse_records};
pub use entry::{Entry, EntryId, VisualHandle};
pub use model::SceneModel;
