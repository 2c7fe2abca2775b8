// Copyright 2025 the Golddust Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use golddust_scene::VisualHandle;
use kurbo::{Affine, Point, Vec2};
use peniko::Color;

use crate::style::{PointStyle, TextStyle};

/// Description of a label primitive.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelDesc {
    /// Text to display.
    pub text: String,
    /// Initial style.
    pub style: TextStyle,
    /// Normalized anchor inside the text box; `(0.0, 0.5)` is left edge,
    /// vertically centred.
    pub anchor: Vec2,
}

/// One batched fill pass over many points.
///
/// Positions are in the local coordinates of the scene layer (data space).
#[derive(Clone, Copy, Debug)]
pub struct PointBatch<'a> {
    /// Point centres.
    pub positions: &'a [Point],
    /// Local radius, already counter-scaled for the current zoom.
    pub radius: f64,
    /// Shape, fill and blending for every point in the pass.
    pub style: &'a PointStyle,
}

/// Rendering capability consumed by [`crate::RenderSync`].
///
/// Implementations own their primitive storage. Handles returned by
/// [`SceneBackend::create_label`] must stay valid until passed to
/// [`SceneBackend::destroy_label`]. Operations on unknown handles should be
/// ignored.
pub trait SceneBackend {
    /// Create a label primitive.
    fn create_label(&mut self, desc: LabelDesc) -> VisualHandle;
    /// Destroy a previously created label.
    fn destroy_label(&mut self, handle: VisualHandle);

    /// Position a label in scene-layer coordinates with a uniform local scale.
    fn set_label_transform(&mut self, handle: VisualHandle, position: Point, scale: f64);
    /// Restyle a label.
    fn set_label_style(&mut self, handle: VisualHandle, style: &TextStyle);
    /// Set the draw order of labels, bottom first.
    ///
    /// `order` lists every live label exactly once.
    fn restack_labels(&mut self, order: &[VisualHandle]);
    /// Show or hide the label group as a whole.
    fn set_labels_visible(&mut self, visible: bool);

    /// Remove all batched point geometry.
    fn clear_points(&mut self);
    /// Append one batched fill pass on top of the existing point geometry.
    fn fill_points(&mut self, batch: PointBatch<'_>);

    /// Set the transform of the top-level scene layer.
    fn set_layer_transform(&mut self, transform: Affine);
    /// Set the color the surface is cleared to behind the scene layer.
    fn set_background(&mut self, color: Color);
}
