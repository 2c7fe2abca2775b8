// Copyright 2025 the Golddust Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use golddust_scene::LoadError;
use thiserror::Error;

use crate::settings::SettingsError;

/// Errors the viewer reports to its host.
///
/// None of these are fatal to the viewer: after any of them it stays
/// pannable and zoomable.
#[derive(Debug, Error)]
pub enum ViewerError {
    /// The dataset could not be fetched or parsed; the scene stays empty.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// A settings read or write was rejected.
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// A specialized `Result` type for viewer operations.
pub type Result<T> = std::result::Result<T, ViewerError>;
