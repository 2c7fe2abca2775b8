// Copyright 2025 the Golddust Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named fields exposed to a host settings panel.

use thiserror::Error;

/// Name of the zoom level field, bidirectional with the viewport scale.
pub const SCALE_FACTOR: &str = "scaleFactor";
/// Name of the label visibility field.
pub const SHOW_TEXTS: &str = "showTexts";
/// Name of the read-only loaded entry count field.
pub const DATA_SIZE: &str = "dataSize";

/// Value of a settings field.
#[derive(Clone, Debug, PartialEq)]
pub enum SettingValue {
    /// Numeric field.
    Number(f64),
    /// Boolean field.
    Bool(bool),
    /// Display-only text field.
    Text(String),
}

/// Kind of value a field holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingKind {
    /// [`SettingValue::Number`].
    Number,
    /// [`SettingValue::Bool`].
    Bool,
    /// [`SettingValue::Text`].
    Text,
}

impl SettingValue {
    /// Kind of this value.
    #[must_use]
    pub fn kind(&self) -> SettingKind {
        match self {
            Self::Number(_) => SettingKind::Number,
            Self::Bool(_) => SettingKind::Bool,
            Self::Text(_) => SettingKind::Text,
        }
    }
}

/// Static description of a field, enough for a host to build a control.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SettingDescriptor {
    /// Field name.
    pub name: &'static str,
    /// Value kind.
    pub kind: SettingKind,
    /// Whether the host may write the field.
    pub read_only: bool,
    /// Suggested increment for numeric controls.
    pub step: Option<f64>,
}

/// Fields in display order.
pub const DESCRIPTORS: [SettingDescriptor; 3] = [
    SettingDescriptor {
        name: DATA_SIZE,
        kind: SettingKind::Text,
        read_only: true,
        step: None,
    },
    SettingDescriptor {
        name: SCALE_FACTOR,
        kind: SettingKind::Number,
        read_only: false,
        step: Some(crate::config::DEFAULT_ZOOM_STEP),
    },
    SettingDescriptor {
        name: SHOW_TEXTS,
        kind: SettingKind::Bool,
        read_only: false,
        step: None,
    },
];

/// Looks up a field descriptor by name.
#[must_use]
pub fn descriptor(name: &str) -> Option<&'static SettingDescriptor> {
    DESCRIPTORS.iter().find(|d| d.name == name)
}

/// A settings read or write was rejected.
#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    /// No field has this name.
    #[error("unknown setting {0:?}")]
    Unknown(String),
    /// The field cannot be written.
    #[error("setting {0:?} is read-only")]
    ReadOnly(&'static str),
    /// A numeric value is NaN or infinite.
    #[error("setting {0:?} requires a finite number")]
    NonFinite(&'static str),
    /// The value has the wrong kind for the field.
    #[error("setting {name:?} expects {expected:?}, got {actual:?}")]
    Mismatch {
        /// Field name.
        name: &'static str,
        /// Kind the field holds.
        expected: SettingKind,
        /// Kind that was supplied.
        actual: SettingKind,
    },
}

/// Snapshot of every field, as a panel would display them.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Current zoom level.
    pub scale_factor: f64,
    /// Whether labels are shown.
    pub show_texts: bool,
    /// Loaded entry count, empty before the first load.
    pub data_size: String,
}

impl Settings {
    /// Reads one field by name.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Unknown`] for names not in [`DESCRIPTORS`].
    pub fn get(&self, name: &str) -> Result<SettingValue, SettingsError> {
        match name {
            SCALE_FACTOR => Ok(SettingValue::Number(self.scale_factor)),
            SHOW_TEXTS => Ok(SettingValue::Bool(self.show_texts)),
            DATA_SIZE => Ok(SettingValue::Text(self.data_size.clone())),
            _ => Err(SettingsError::Unknown(name.to_owned())),
        }
    }
}

/// Checks that `value` may be written to `name`.
pub(crate) fn validate_write(
    name: &str,
    value: &SettingValue,
) -> Result<&'static SettingDescriptor, SettingsError> {
    let desc = descriptor(name).ok_or_else(|| SettingsError::Unknown(name.to_owned()))?;
    if desc.read_only {
        return Err(SettingsError::ReadOnly(desc.name));
    }
    if desc.kind != value.kind() {
        return Err(SettingsError::Mismatch {
            name: desc.name,
            expected: desc.kind,
            actual: value.kind(),
        });
    }
    if let SettingValue::Number(n) = value
        && !n.is_finite()
    {
        return Err(SettingsError::NonFinite(desc.name));
    }
    Ok(desc)
}
