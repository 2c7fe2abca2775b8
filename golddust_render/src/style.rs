// Copyright 2025 the Golddust Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::{BlendMode, Color, Compose, Mix};

/// Geometry used for each point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointShape {
    /// Filled circle.
    Circle,
    /// Regular star polygon with `points` tips; `3` gives a triangle.
    Star {
        /// Number of tips.
        points: u8,
        /// Inner radius relative to the outer radius, in `0.0..=1.0`.
        inner_ratio: f64,
    },
}

/// Fill parameters for one point pass.
#[derive(Clone, Debug, PartialEq)]
pub struct PointStyle {
    /// Shape drawn at each position.
    pub shape: PointShape,
    /// Fill color.
    pub color: Color,
    /// How the pass composites over what is beneath it.
    pub blend: BlendMode,
}

/// Label text parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in on-screen pixels.
    pub font_size: f32,
    /// Text fill.
    pub color: Color,
}

/// Visual constants for the whole scene.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderStyle {
    /// Clear color behind the scene.
    pub background: Color,
    /// On-screen point radius in pixels.
    pub base_radius: f64,
    /// Style of points whose label does not match.
    pub point: PointStyle,
    /// Style of matched points.
    pub highlighted_point: PointStyle,
    /// Style of unmatched labels.
    pub label: TextStyle,
    /// Style of matched labels.
    pub highlighted_label: TextStyle,
    /// Horizontal gap between a point and its label, in on-screen pixels.
    pub label_offset: f64,
}

impl RenderStyle {
    /// Point style for a given match state.
    #[must_use]
    pub fn point_style(&self, matched: bool) -> &PointStyle {
        if matched {
            &self.highlighted_point
        } else {
            &self.point
        }
    }

    /// Label style for a given match state.
    #[must_use]
    pub fn label_style(&self, matched: bool) -> &TextStyle {
        if matched {
            &self.highlighted_label
        } else {
            &self.label
        }
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        let triangle = PointShape::Star {
            points: 3,
            inner_ratio: 1.0,
        };
        // Overlapping points brighten instead of hiding each other.
        let additive = BlendMode::new(Mix::Normal, Compose::Plus);
        Self {
            background: Color::from_rgb8(0x22, 0x22, 0x22),
            base_radius: 1.0,
            point: PointStyle {
                shape: triangle,
                color: Color::from_rgb8(0xff, 0xaa, 0x33),
                blend: additive,
            },
            highlighted_point: PointStyle {
                shape: triangle,
                color: Color::from_rgb8(0xff, 0x00, 0x00),
                blend: additive,
            },
            label: TextStyle {
                font_size: 16.0,
                color: Color::from_rgb8(0x44, 0x44, 0x44),
            },
            highlighted_label: TextStyle {
                font_size: 16.0,
                color: Color::from_rgb8(0xff, 0xff, 0xff),
            },
            label_offset: 4.0,
        }
    }
}
