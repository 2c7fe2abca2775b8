// Copyright 2025 the Golddust Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use golddust_query::{QueryEngine, QueryStatus};
use golddust_render::{RenderStyle, RenderSync, SceneBackend, SyncReport};
use golddust_scene::{LoadError, SceneModel};
use golddust_view2d::Viewport;
use kurbo::{Point, Size};

use crate::config::Config;
use crate::error::Result;
use crate::input::{EventDisposition, InputController, KeyResponse, WheelInput};
use crate::settings::{self, SettingValue, Settings};

/// The viewer core: every piece of session state plus the backend it drives.
///
/// Each handler mutates the relevant state and then re-synchronizes the
/// backend, so after any call the backend reflects the current scene,
/// viewport and match state.
#[derive(Debug)]
pub struct Viewer<B: SceneBackend> {
    config: Config,
    viewport: Viewport,
    scene: SceneModel,
    sync: RenderSync,
    query: QueryEngine,
    input: InputController,
    backend: B,
    load_error: Option<String>,
}

impl<B: SceneBackend> Viewer<B> {
    /// Creates a viewer with the default [`RenderStyle`].
    pub fn new(config: Config, backend: B) -> Self {
        Self::with_style(config, RenderStyle::default(), backend)
    }

    /// Creates a viewer with custom visual constants.
    pub fn with_style(config: Config, style: RenderStyle, backend: B) -> Self {
        let mut sync = RenderSync::new(style);
        sync.set_labels_visible(config.show_texts);
        Self {
            viewport: Viewport::with_scale(config.initial_scale),
            scene: SceneModel::new(),
            sync,
            query: QueryEngine::new(),
            input: InputController::new(config.zoom_step),
            backend,
            load_error: None,
            config,
        }
    }

    /// Configuration the viewer was created with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Current scene.
    pub fn scene(&self) -> &SceneModel {
        &self.scene
    }

    /// Mutable scene access for hosts that set match flags themselves.
    ///
    /// Changes reach the backend on the next [`Self::sync`].
    pub fn scene_mut(&mut self) -> &mut SceneModel {
        &mut self.scene
    }

    /// Render synchronizer, for inspecting label stacking.
    pub fn render_sync(&self) -> &RenderSync {
        &self.sync
    }

    /// Input state machine.
    pub fn input(&self) -> &InputController {
        &self.input
    }

    /// The backend being driven.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the backend, e.g. to present a frame.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Message for the last dataset load failure, if the load failed.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// The surface changed size: recentre the stage origin.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport.resize(Size::new(width, height));
        self.sync();
    }

    /// Completion of the host's dataset fetch.
    ///
    /// On success the scene is replaced, the current query is reapplied to
    /// the new entries and the number of entries is returned.
    ///
    /// # Errors
    ///
    /// Returns the fetch or parse failure. The viewer keeps whatever scene
    /// it had (empty on first load) and stays interactive; nothing is retried.
    pub fn on_dataset_loaded(
        &mut self,
        payload: std::result::Result<Vec<u8>, LoadError>,
    ) -> Result<usize> {
        let limit = self.config.dataset_limit();
        let loaded = payload.and_then(|bytes| self.scene.load_json(&bytes, limit));
        if let Err(err) = loaded {
            tracing::warn!(error = %err, "dataset load failed");
            self.load_error = Some(err.to_string());
            return Err(err.into());
        }
        self.load_error = None;

        if !self.query.last_pattern().is_empty() {
            let pattern = self.query.last_pattern().to_owned();
            self.query.apply_query(&mut self.scene, &pattern);
        }
        self.sync();
        Ok(self.scene.len())
    }

    /// Pointer pressed on the surface.
    pub fn on_pointer_down(&mut self, pointer: Point) {
        self.input.on_pointer_down(&self.viewport, pointer);
    }

    /// Pointer moved over the surface.
    pub fn on_pointer_move(&mut self, pointer: Point) {
        if self.input.on_pointer_move(&mut self.viewport, pointer) {
            self.sync();
        }
    }

    /// Pointer released over the surface.
    pub fn on_pointer_up(&mut self) {
        self.input.on_pointer_up();
    }

    /// Pointer released outside the surface.
    pub fn on_pointer_up_outside(&mut self) {
        self.input.on_pointer_up_outside();
    }

    /// Wheel over the surface.
    pub fn on_wheel(&mut self, wheel: &WheelInput) -> EventDisposition {
        let disposition = self.input.on_wheel(&mut self.viewport, wheel);
        self.sync();
        disposition
    }

    /// Key pressed anywhere on the page.
    pub fn on_key_down(&mut self) -> KeyResponse {
        self.input.on_key_down()
    }

    /// The query input gained or lost focus.
    pub fn set_query_focused(&mut self, focused: bool) {
        self.input.set_query_focused(focused);
    }

    /// The query text changed.
    pub fn on_query_changed(&mut self, text: &str) -> QueryStatus {
        let status = self
            .input
            .on_query_changed(&mut self.query, &mut self.scene, text);
        self.sync();
        status
    }

    /// Status of the most recent query.
    pub fn query_status(&self) -> &QueryStatus {
        self.query.last_status()
    }

    /// Text for the host's status line.
    pub fn status_message(&self) -> String {
        self.query.last_status().message()
    }

    /// Snapshot of every settings field.
    pub fn settings(&self) -> Settings {
        Settings {
            scale_factor: self.viewport.scale(),
            show_texts: self.sync.labels_visible(),
            data_size: if self.scene.is_populated() {
                self.scene.len().to_string()
            } else {
                String::new()
            },
        }
    }

    /// Reads one settings field by name.
    ///
    /// # Errors
    ///
    /// Fails for unknown names.
    pub fn setting(&self, name: &str) -> Result<SettingValue> {
        Ok(self.settings().get(name)?)
    }

    /// Writes one settings field by name and re-synchronizes.
    ///
    /// # Errors
    ///
    /// Fails for unknown or read-only names and for values of the wrong kind.
    pub fn set_setting(&mut self, name: &str, value: SettingValue) -> Result<()> {
        settings::validate_write(name, &value)?;
        match (name, value) {
            (settings::SCALE_FACTOR, SettingValue::Number(scale)) => {
                self.viewport.set_scale(scale);
            }
            (settings::SHOW_TEXTS, SettingValue::Bool(visible)) => {
                self.sync.set_labels_visible(visible);
            }
            _ => {}
        }
        tracing::debug!(name, "setting changed");
        self.sync();
        Ok(())
    }

    /// Destroys every backend primitive, e.g. when the host page unloads.
    ///
    /// Entries are kept; the next handler call rebuilds their labels.
    pub fn teardown(&mut self) {
        self.sync.teardown(&mut self.scene, &mut self.backend);
    }

    /// Re-synchronizes the backend with the current state.
    pub fn sync(&mut self) -> SyncReport {
        self.sync
            .update(&mut self.scene, &self.viewport, &mut self.backend)
    }
}
