// Copyright 2025 the Golddust Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Startup configuration.
//!
//! A [`Config`] can be deserialized (every field has a default) or built
//! from the page's URL query string with [`Config::from_query_string`].

use serde::Deserialize;
use thiserror::Error;

use golddust_view2d::DEFAULT_SCALE;

/// Default value of the `limit` parameter.
pub const DEFAULT_LIMIT: usize = 100;

/// Zoom levels per wheel notch.
pub const DEFAULT_ZOOM_STEP: f64 = 0.25;

/// Viewer configuration read once at startup.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of entries to load.
    ///
    /// Inert unless [`Config::apply_limit`] is set.
    pub limit: usize,
    /// Truncate loaded datasets to [`Config::limit`] entries.
    pub apply_limit: bool,
    /// Zoom level the viewport starts at.
    pub initial_scale: f64,
    /// Zoom levels per wheel notch.
    pub zoom_step: f64,
    /// Whether labels start visible.
    pub show_texts: bool,
    /// Log filter directive, used when `RUST_LOG` is not set.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            apply_limit: false,
            initial_scale: DEFAULT_SCALE,
            zoom_step: DEFAULT_ZOOM_STEP,
            show_texts: false,
            trace_level: None,
        }
    }
}

/// A URL parameter that could not be interpreted.
///
/// These never reach the host: the parameter is skipped and the default kept.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ConfigParseError {
    #[error("{0:?} does not start with an integer")]
    NotAnInteger(String),
    #[error("{0} is negative")]
    Negative(i64),
}

impl Config {
    /// Reads recognized parameters from a URL query string.
    ///
    /// A leading `?` is accepted. Recognized keys are `limit` and
    /// `trace_level`; everything else is ignored, as are values that do not
    /// parse.
    #[must_use]
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut config = Self::default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "limit" => match parse_limit(&value) {
                    Ok(limit) => config.limit = limit,
                    Err(err) => tracing::debug!(%err, "ignoring limit parameter"),
                },
                "trace_level" => config.trace_level = Some(value.into_owned()),
                _ => {}
            }
        }
        config
    }

    /// The truncation to apply when loading, if enabled.
    #[must_use]
    pub fn dataset_limit(&self) -> Option<usize> {
        self.apply_limit.then_some(self.limit)
    }
}

/// Parses the leading integer of `value`, ignoring trailing garbage the way
/// browsers' `parseInt` does.
fn parse_limit(value: &str) -> Result<usize, ConfigParseError> {
    let trimmed = value.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let parsed: i64 = digits[..end]
        .parse()
        .map_err(|_| ConfigParseError::NotAnInteger(value.to_owned()))?;
    let parsed = if negative { -parsed } else { parsed };
    usize::try_from(parsed).map_err(|_| ConfigParseError::Negative(parsed))
}
