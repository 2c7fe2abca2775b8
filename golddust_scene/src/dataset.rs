// Copyright 2025 the Golddust Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::Deserialize;
use thiserror::Error;

/// Resource name the host fetches the dataset from.
pub const DEFAULT_DATASET_NAME: &str = "dataset.json";

/// One record of the dataset wire format: `{"x": number, "y": number, "word": string}`.
///
/// Unknown fields are ignored.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Record {
    /// Data-space X coordinate.
    pub x: f64,
    /// Data-space Y coordinate.
    pub y: f64,
    /// Label shown next to the point and matched by queries.
    pub word: String,
}

impl Record {
    /// Convenience constructor.
    #[must_use]
    pub fn new(x: f64, y: f64, word: impl Into<String>) -> Self {
        Self {
            x,
            y,
            word: word.into(),
        }
    }
}

/// Failure to populate the scene from a dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The host could not retrieve the dataset.
    #[error("failed to fetch dataset: {0}")]
    Fetch(String),

    /// The payload is not a JSON array of `{x, y, word}` objects.
    #[error("malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record carries a NaN or infinite coordinate.
    #[error("record {index} has a non-finite position")]
    NonFinitePosition {
        /// Index of the offending record in load order.
        index: usize,
    },
}

/// Parses a dataset payload into records, keeping at most `limit` of them.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] if `bytes` is not a JSON array of records.
pub fn parse_records(bytes: &[u8], limit: Option<usize>) -> Result<Vec<Record>, LoadError> {
    let mut records: Vec<Record> = serde_json::from_slice(bytes)?;
    if let Some(limit) = limit {
        records.truncate(limit);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_records_and_ignores_extra_fields() {
        let json = br#"[{"x": 1, "y": 2.5, "word": "a", "freq": 9}]"#;
        let records = parse_records(json, None).unwrap();
        assert_eq!(records, vec![Record::new(1.0, 2.5, "a")]);
    }

    #[test]
    fn non_array_is_rejected() {
        let err = parse_records(br#"{"x": 1, "y": 2, "word": "a"}"#, None).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn missing_field_is_rejected() {
        let err = parse_records(br#"[{"x": 1, "word": "a"}]"#, None).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn mistyped_field_is_rejected() {
        let err = parse_records(br#"[{"x": "1", "y": 2, "word": "a"}]"#, None).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn limit_truncates() {
        let json = br#"[
            {"x": 0, "y": 0, "word": "a"},
            {"x": 1, "y": 1, "word": "b"},
            {"x": 2, "y": 2, "word": "c"}
        ]"#;
        let records = parse_records(json, Some(2)).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].word, "b");
        assert_eq!(parse_records(json, Some(10)).unwrap().len(), 3);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = LoadError::NonFinitePosition { index: 4 };
        assert_eq!(err.to_string(), "record 4 has a non-finite position");
        let err = LoadError::Fetch("404".into());
        assert_eq!(err.to_string(), "failed to fetch dataset: 404");
    }
}
