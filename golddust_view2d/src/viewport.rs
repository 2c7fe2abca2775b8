// Copyright 2025 the Golddust Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Zoom level a fresh [`Viewport`] starts at (linear scale `2^5 = 32`).
pub const DEFAULT_SCALE: f64 = 5.0;

/// Pan + exponential zoom over a 2D data plane.
///
/// The mapping from data space to screen space is
///
/// ```text
/// screen = stage_origin + pan_offset + 2^scale * data
/// ```
///
/// `stage_origin` is the screen-space point the host recentres on resize;
/// until the first resize it is the screen origin and the mapping reduces
/// to `pan_offset + 2^scale * data`.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    stage_origin: Point,
    pan_offset: Vec2,
    scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// Creates a viewport at [`DEFAULT_SCALE`] with zero pan and the stage
    /// origin at the screen origin.
    #[must_use]
    pub fn new() -> Self {
        Self::with_scale(DEFAULT_SCALE)
    }

    /// Creates a viewport at the given zoom level.
    #[must_use]
    pub fn with_scale(scale: f64) -> Self {
        Self {
            stage_origin: Point::ORIGIN,
            pan_offset: Vec2::ZERO,
            scale,
        }
    }

    /// Returns the current zoom level in log2 units.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the zoom level without anchoring.
    ///
    /// The pan offset is left alone, so content zooms about the stage
    /// origin + pan point. This is what a settings surface editing the zoom
    /// level directly expects.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    /// Returns the linear scale factor `2^scale`.
    #[must_use]
    pub fn linear_scale(&self) -> f64 {
        self.scale.exp2()
    }

    /// Returns `2^(-scale)`, the local counter-scale that keeps an item at a
    /// constant on-screen size inside a layer scaled by [`Self::linear_scale`].
    #[must_use]
    pub fn inverse_linear_scale(&self) -> f64 {
        (-self.scale).exp2()
    }

    /// Returns the pan offset in screen space, relative to the stage origin.
    #[must_use]
    pub fn pan_offset(&self) -> Vec2 {
        self.pan_offset
    }

    /// Replaces the pan offset.
    pub fn set_pan_offset(&mut self, offset: Vec2) {
        self.pan_offset = offset;
    }

    /// Pans the view by a screen-space delta.
    pub fn pan(&mut self, delta: Vec2) {
        self.pan_offset += delta;
    }

    /// Returns the stage origin in screen space.
    #[must_use]
    pub fn stage_origin(&self) -> Point {
        self.stage_origin
    }

    /// Moves the stage origin.
    pub fn set_stage_origin(&mut self, origin: Point) {
        self.stage_origin = origin;
    }

    /// Recentres the stage origin for a surface of the given size.
    pub fn resize(&mut self, size: Size) {
        self.stage_origin = Point::new(size.width / 2.0, size.height / 2.0);
    }

    /// Zooms by `delta` levels around a screen-space anchor.
    ///
    /// The data point under `anchor` before the call is under `anchor`
    /// after it. Positive `delta` zooms in.
    pub fn zoom_by(&mut self, delta: f64, anchor: Point) {
        let anchor_stage = anchor - self.stage_origin;
        let rel = delta.exp2();
        self.scale += delta;
        self.pan_offset = (self.pan_offset - anchor_stage) * rel + anchor_stage;
    }

    /// Converts a data-space point into screen space.
    #[must_use]
    pub fn to_screen(&self, data: Point) -> Point {
        self.stage_origin + self.pan_offset + data.to_vec2() * self.linear_scale()
    }

    /// Converts a screen-space point into data space.
    #[must_use]
    pub fn to_data(&self, screen: Point) -> Point {
        let local = screen - self.stage_origin - self.pan_offset;
        (local / self.linear_scale()).to_point()
    }

    /// Transform applied to the layer holding the scene content.
    ///
    /// Translates by the stage origin plus pan offset, then scales by the
    /// linear scale, so `layer_transform() * data == to_screen(data)`.
    #[must_use]
    pub fn layer_transform(&self) -> Affine {
        Affine::translate(self.stage_origin.to_vec2() + self.pan_offset)
            * Affine::scale(self.linear_scale())
    }

    /// Returns the data-space rectangle visible on a surface of `view_size`
    /// whose top-left corner is the screen origin.
    #[must_use]
    pub fn visible_data_rect(&self, view_size: Size) -> Rect {
        let p0 = self.to_data(Point::ORIGIN);
        let p1 = self.to_data(Point::new(view_size.width, view_size.height));
        Rect::from_points(p0, p1)
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            stage_origin: self.stage_origin,
            pan_offset: self.pan_offset,
            scale: self.scale,
            linear_scale: self.linear_scale(),
        }
    }
}

/// Debug snapshot of a [`Viewport`] state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportDebugInfo {
    /// Stage origin in screen coordinates.
    pub stage_origin: Point,
    /// Pan offset relative to the stage origin.
    pub pan_offset: Vec2,
    /// Zoom level in log2 units.
    pub scale: f64,
    /// Linear scale factor, `2^scale`.
    pub linear_scale: f64,
}
