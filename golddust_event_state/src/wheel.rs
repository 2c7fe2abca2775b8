// Copyright 2025 the Golddust Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel delta normalization.
//!
//! Browsers and toolkits have reported scroll wheels in three ways:
//!
//! - the standard `wheel` event's `deltaY` (positive = scroll down),
//! - WebKit's legacy `mousewheel` `wheelDeltaY` (positive = scroll up),
//! - the older `mousewheel` `wheelDelta` (positive = scroll up).
//!
//! [`WheelDelta::normalized`] folds all three into the standard sign
//! convention by taking the first usable field in that order.

/// Raw wheel deltas as reported by the host.
///
/// Fields the host event does not carry stay `None`. A zero or NaN value is
/// treated the same as a missing one.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelDelta {
    /// Standard vertical delta; positive scrolls down.
    pub delta_y: Option<f64>,
    /// Legacy WebKit vertical delta; positive scrolls up.
    pub wheel_delta_y: Option<f64>,
    /// Legacy generic delta; positive scrolls up.
    pub wheel_delta: Option<f64>,
}

/// Which way a wheel event zooms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Scrolling up: increase the zoom level.
    In,
    /// Scrolling down: decrease the zoom level.
    Out,
}

fn usable(v: Option<f64>) -> Option<f64> {
    v.filter(|v| *v != 0.0 && !v.is_nan())
}

impl WheelDelta {
    /// A standard `wheel` event delta.
    #[must_use]
    pub fn standard(delta_y: f64) -> Self {
        Self {
            delta_y: Some(delta_y),
            ..Self::default()
        }
    }

    /// Signed delta in the standard convention (positive scrolls down).
    ///
    /// Returns `0.0` when no field carries a usable value.
    #[must_use]
    pub fn normalized(&self) -> f64 {
        usable(self.delta_y)
            .or_else(|| usable(self.wheel_delta_y).map(|v| -v))
            .or_else(|| usable(self.wheel_delta).map(|v| -v))
            .unwrap_or(0.0)
    }

    /// Zoom direction implied by this event, if any.
    #[must_use]
    pub fn zoom_direction(&self) -> Option<ZoomDirection> {
        let delta = self.normalized();
        if delta > 0.0 {
            Some(ZoomDirection::Out)
        } else if delta < 0.0 {
            Some(ZoomDirection::In)
        } else {
            None
        }
    }

    /// Signed zoom level change for a fixed `step`, if any.
    #[must_use]
    pub fn zoom_delta(&self, step: f64) -> Option<f64> {
        self.zoom_direction().map(|dir| match dir {
            ZoomDirection::In => step,
            ZoomDirection::Out => -step,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_delta_keeps_sign() {
        assert_eq!(WheelDelta::standard(3.0).normalized(), 3.0);
        assert_eq!(WheelDelta::standard(-3.0).normalized(), -3.0);
    }

    #[test]
    fn legacy_deltas_are_inverted() {
        let webkit = WheelDelta {
            wheel_delta_y: Some(120.0),
            ..WheelDelta::default()
        };
        assert_eq!(webkit.normalized(), -120.0);

        let other = WheelDelta {
            wheel_delta: Some(-120.0),
            ..WheelDelta::default()
        };
        assert_eq!(other.normalized(), 120.0);
    }

    #[test]
    fn first_usable_field_wins() {
        let both = WheelDelta {
            delta_y: Some(0.0),
            wheel_delta_y: Some(-40.0),
            wheel_delta: Some(120.0),
        };
        assert_eq!(both.normalized(), 40.0);

        let nan = WheelDelta {
            delta_y: Some(f64::NAN),
            wheel_delta_y: None,
            wheel_delta: Some(120.0),
        };
        assert_eq!(nan.normalized(), -120.0);
    }

    #[test]
    fn empty_event_has_no_direction() {
        assert_eq!(WheelDelta::default().normalized(), 0.0);
        assert_eq!(WheelDelta::default().zoom_direction(), None);
        assert_eq!(WheelDelta::standard(0.0).zoom_delta(0.25), None);
    }

    #[test]
    fn conventions_agree_on_direction() {
        let down = [
            WheelDelta::standard(100.0),
            WheelDelta {
                wheel_delta_y: Some(-120.0),
                ..WheelDelta::default()
            },
            WheelDelta {
                wheel_delta: Some(-3.0),
                ..WheelDelta::default()
            },
        ];
        for event in down {
            assert_eq!(event.zoom_direction(), Some(ZoomDirection::Out));
            assert_eq!(event.zoom_delta(0.25), Some(-0.25));
        }
        assert_eq!(WheelDelta::standard(-1.0).zoom_delta(0.25), Some(0.25));
    }
}
