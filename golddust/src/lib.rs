// Copyright 2025 the Golddust Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Golddust: an interactive viewer core for labeled 2D point clouds.
//!
//! The viewer loads a dataset of labeled points, shows them as a pannable,
//! zoomable scene and highlights the points whose label matches a live
//! regular-expression query.
//!
//! This crate ties the workspace together:
//!
//! - [`Viewer`]: owns the viewport, scene, render synchronizer, query
//!   engine and input controller, and re-synchronizes its backend after
//!   every event.
//! - [`input`]: the pointer/wheel/keyboard state machine.
//! - [`settings`]: named fields for a host settings panel.
//! - [`config`]: startup configuration, including URL query parameters.
//! - [`observability`]: `tracing` subscriber setup.
//!
//! The host owns the window or page, fetches the dataset and implements
//! [`SceneBackend`] on top of its renderer. Everything else happens
//! synchronously inside the handler calls.
//!
//! ## Example
//!
//! ```rust
//! use golddust::{Config, SceneBackend, Viewer};
//! # use golddust::render::{Color, LabelDesc, PointBatch, TextStyle};
//! # use golddust::scene::VisualHandle;
//! # use kurbo::{Affine, Point};
//! # #[derive(Debug, Default)]
//! # struct NullBackend(u32);
//! # impl SceneBackend for NullBackend {
//! #     fn create_label(&mut self, _: LabelDesc) -> VisualHandle { self.0 += 1; VisualHandle(self.0) }
//! #     fn destroy_label(&mut self, _: VisualHandle) {}
//! #     fn set_label_transform(&mut self, _: VisualHandle, _: Point, _: f64) {}
//! #     fn set_label_style(&mut self, _: VisualHandle, _: &TextStyle) {}
//! #     fn restack_labels(&mut self, _: &[VisualHandle]) {}
//! #     fn set_labels_visible(&mut self, _: bool) {}
//! #     fn clear_points(&mut self) {}
//! #     fn fill_points(&mut self, _: PointBatch<'_>) {}
//! #     fn set_layer_transform(&mut self, _: Affine) {}
//! #     fn set_background(&mut self, _: Color) {}
//! # }
//!
//! let config = Config::from_query_string("?limit=50");
//! let mut viewer = Viewer::new(config, NullBackend::default());
//! viewer.resize(800.0, 600.0);
//!
//! let json = br#"[{"x": 0, "y": 0, "word": "cat"}, {"x": 1, "y": 1, "word": "dog"}]"#;
//! viewer.on_dataset_loaded(Ok(json.to_vec())).unwrap();
//!
//! viewer.on_query_changed("^d");
//! assert_eq!(viewer.status_message(), "not empty");
//! assert_eq!(viewer.scene().matched_count(), 1);
//! ```

pub mod config;
mod error;
pub mod input;
pub mod observability;
pub mod settings;
mod viewer;

pub use config::Config;
pub use error::{Result, ViewerError};
pub use golddust_render::SceneBackend;
pub use viewer::Viewer;

/// Re-export of the event state crate.
pub use golddust_event_state as event_state;
/// Re-export of the query crate.
pub use golddust_query as query;
/// Re-export of the render crate.
pub use golddust_render as render;
/// Re-export of the scene crate.
pub use golddust_scene as scene;
/// Re-export of the viewport crate.
pub use golddust_view2d as view2d;
