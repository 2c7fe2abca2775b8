// Copyright 2025 the Golddust Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Golddust Render Reference Backend.
//!
//! This crate provides a small, stateful implementation of
//! [`SceneBackend`] for **state tracing**.
//!
//! It is intentionally *not* a renderer:
//! - It does **not** rasterize anything.
//! - It keeps the retained state a real scene graph would hold (labels,
//!   their stacking, the point passes, the layer transform) so tests can
//!   assert on it.
//! - It logs every call as an [`Event`] in the order it was applied.

use golddust_render::{LabelDesc, PointBatch, PointStyle, SceneBackend, TextStyle};
use golddust_scene::VisualHandle;
use kurbo::{Affine, Point, Vec2};
use peniko::Color;

/// Retained state of one label.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelState {
    /// Text shown.
    pub text: String,
    /// Current style.
    pub style: TextStyle,
    /// Normalized anchor.
    pub anchor: Vec2,
    /// Position in scene-layer coordinates.
    pub position: Point,
    /// Uniform local scale.
    pub scale: f64,
}

/// One recorded batched fill pass.
#[derive(Clone, Debug, PartialEq)]
pub struct PointPass {
    /// Point centres.
    pub positions: Vec<Point>,
    /// Local radius.
    pub radius: f64,
    /// Style used for the pass.
    pub style: PointStyle,
}

/// Event recorded by the reference backend.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// A label was created.
    CreateLabel(VisualHandle),
    /// A label was destroyed.
    DestroyLabel(VisualHandle),
    /// A label was moved or rescaled.
    LabelTransform(VisualHandle),
    /// A label was restyled.
    LabelStyle(VisualHandle),
    /// Labels were restacked; carries the number of labels in the new order.
    Restack(usize),
    /// Label group visibility changed.
    LabelsVisible(bool),
    /// Point geometry was cleared.
    ClearPoints,
    /// A point pass was drawn; carries the number of points.
    FillPoints(usize),
    /// The layer transform was set.
    LayerTransform(Affine),
    /// The clear color was set.
    Background(Color),
}

/// Simple reference implementation of [`SceneBackend`].
///
/// This backend:
/// - Stores labels in a vector keyed by their handles,
/// - Tracks the label stack, bottom first, with new labels added on top,
/// - Keeps the point passes drawn since the last clear,
/// - Records an [`Event`] for every call.
#[derive(Debug)]
pub struct RefBackend {
    labels: Vec<Option<LabelState>>,
    stack: Vec<VisualHandle>,
    points: Vec<PointPass>,
    layer_transform: Affine,
    labels_visible: bool,
    background: Option<Color>,

    /// Log of events in the order they were applied.
    events: Vec<Event>,
}

impl Default for RefBackend {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            stack: Vec::new(),
            points: Vec::new(),
            layer_transform: Affine::IDENTITY,
            labels_visible: true,
            background: None,
            events: Vec::new(),
        }
    }
}

impl RefBackend {
    /// Returns a slice of recorded events.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Clears recorded events but keeps retained state.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Returns the state of a live label.
    pub fn label(&self, handle: VisualHandle) -> Option<&LabelState> {
        self.labels.get(handle.0 as usize).and_then(Option::as_ref)
    }

    /// Number of live labels.
    pub fn live_labels(&self) -> usize {
        self.labels.iter().filter(|l| l.is_some()).count()
    }

    /// Label stacking, bottom first.
    pub fn stack(&self) -> &[VisualHandle] {
        &self.stack
    }

    /// Position of `handle` in the label stack; larger draws later.
    pub fn draw_index(&self, handle: VisualHandle) -> Option<usize> {
        self.stack.iter().position(|h| *h == handle)
    }

    /// Point passes drawn since the last clear, bottom first.
    pub fn point_passes(&self) -> &[PointPass] {
        &self.points
    }

    /// Current transform of the scene layer.
    pub fn layer_transform(&self) -> Affine {
        self.layer_transform
    }

    /// Whether the label group is visible.
    pub fn labels_visible(&self) -> bool {
        self.labels_visible
    }

    /// Clear color, once one has been set.
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    fn label_mut(&mut self, handle: VisualHandle) -> Option<&mut LabelState> {
        self.labels
            .get_mut(handle.0 as usize)
            .and_then(Option::as_mut)
    }
}

impl SceneBackend for RefBackend {
    fn create_label(&mut self, desc: LabelDesc) -> VisualHandle {
        let id = u32::try_from(self.labels.len())
            .expect("RefBackend: too many labels for u32 VisualHandle");
        let handle = VisualHandle(id);
        self.labels.push(Some(LabelState {
            text: desc.text,
            style: desc.style,
            anchor: desc.anchor,
            position: Point::ORIGIN,
            scale: 1.0,
        }));
        self.stack.push(handle);
        self.events.push(Event::CreateLabel(handle));
        handle
    }

    fn destroy_label(&mut self, handle: VisualHandle) {
        if let Some(slot) = self.labels.get_mut(handle.0 as usize) {
            *slot = None;
        }
        self.stack.retain(|h| *h != handle);
        self.events.push(Event::DestroyLabel(handle));
    }

    fn set_label_transform(&mut self, handle: VisualHandle, position: Point, scale: f64) {
        if let Some(label) = self.label_mut(handle) {
            label.position = position;
            label.scale = scale;
        }
        self.events.push(Event::LabelTransform(handle));
    }

    fn set_label_style(&mut self, handle: VisualHandle, style: &TextStyle) {
        if let Some(label) = self.label_mut(handle) {
            label.style = style.clone();
        }
        self.events.push(Event::LabelStyle(handle));
    }

    fn restack_labels(&mut self, order: &[VisualHandle]) {
        let labels = &self.labels;
        self.stack = order
            .iter()
            .copied()
            .filter(|h| labels.get(h.0 as usize).is_some_and(Option::is_some))
            .collect();
        self.events.push(Event::Restack(self.stack.len()));
    }

    fn set_labels_visible(&mut self, visible: bool) {
        self.labels_visible = visible;
        self.events.push(Event::LabelsVisible(visible));
    }

    fn clear_points(&mut self) {
        self.points.clear();
        self.events.push(Event::ClearPoints);
    }

    fn fill_points(&mut self, batch: PointBatch<'_>) {
        self.points.push(PointPass {
            positions: batch.positions.to_vec(),
            radius: batch.radius,
            style: batch.style.clone(),
        });
        self.events.push(Event::FillPoints(batch.positions.len()));
    }

    fn set_layer_transform(&mut self, transform: Affine) {
        self.layer_transform = transform;
        self.events.push(Event::LayerTransform(transform));
    }

    fn set_background(&mut self, color: Color) {
        self.background = Some(color);
        self.events.push(Event::Background(color));
    }
}
