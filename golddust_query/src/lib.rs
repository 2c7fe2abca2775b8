// Copyright 2025 the Golddust Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Golddust Query: highlight entries whose label matches a live pattern.
//!
//! Every query change rescans the whole scene; there is no incremental
//! state between queries. Patterns are case-sensitive regular expressions
//! tested anywhere in the label (unanchored unless the pattern says
//! otherwise).
//!
//! A malformed pattern never disturbs the scene: the match flags stay as
//! they were and the failure is reported through [`QueryStatus::Invalid`].
//!
//! ```rust
//! use golddust_query::{QueryEngine, QueryStatus};
//! use golddust_scene::{Record, SceneModel};
//!
//! let mut scene = SceneModel::new();
//! scene
//!     .load(vec![
//!         Record::new(0.0, 0.0, "cat"),
//!         Record::new(1.0, 0.0, "dog"),
//!         Record::new(2.0, 0.0, "bird"),
//!     ])
//!     .unwrap();
//!
//! let mut query = QueryEngine::new();
//! let status = query.apply_query(&mut scene, "^d");
//! assert_eq!(status, QueryStatus::NotEmpty { matched: 1 });
//!
//! let status = query.apply_query(&mut scene, "[");
//! assert!(matches!(status, QueryStatus::Invalid(_)));
//! assert_eq!(scene.matched_count(), 1);
//! ```

use golddust_scene::SceneModel;
use regex::{Regex, RegexBuilder};
use thiserror::Error;

/// A query pattern failed to compile.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("invalid pattern {pattern:?}: {source}")]
pub struct InvalidPatternError {
    pattern: String,
    #[source]
    source: regex::Error,
}

impl InvalidPatternError {
    /// The pattern as typed.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// Outcome of the most recent query, as reported to the host.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum QueryStatus {
    /// The query is empty; nothing is highlighted.
    #[default]
    Empty,
    /// The query compiled and was applied.
    NotEmpty {
        /// Number of entries whose label matched.
        matched: usize,
    },
    /// The query did not compile; match state was left untouched.
    Invalid(InvalidPatternError),
}

impl QueryStatus {
    /// Status line for the host's message area.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Empty => "empty".to_owned(),
            Self::NotEmpty { .. } => "not empty".to_owned(),
            Self::Invalid(err) => err.to_string(),
        }
    }
}

/// Compiles `pattern` the way queries are interpreted.
///
/// # Errors
///
/// Returns [`InvalidPatternError`] if the pattern is not a valid regular
/// expression.
pub fn compile(pattern: &str) -> Result<Regex, InvalidPatternError> {
    RegexBuilder::new(pattern)
        .case_insensitive(false)
        .build()
        .map_err(|source| InvalidPatternError {
            pattern: pattern.to_owned(),
            source,
        })
}

/// Applies text queries to a scene's match flags.
#[derive(Debug, Default)]
pub struct QueryEngine {
    last_pattern: String,
    last_status: QueryStatus,
    compiled: Option<Regex>,
}

impl QueryEngine {
    /// Creates an engine with an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-evaluates every entry of `scene` against `pattern`.
    ///
    /// - Empty pattern: clears every match flag.
    /// - Valid pattern: sets each flag to whether the label matches.
    /// - Invalid pattern: leaves every flag as it was.
    ///
    /// On success the scene's match epoch is bumped so renderers raise the
    /// matched labels.
    pub fn apply_query(&mut self, scene: &mut SceneModel, pattern: &str) -> QueryStatus {
        let status = if pattern.is_empty() {
            scene.clear_matches();
            self.compiled = None;
            QueryStatus::Empty
        } else {
            match self.regex_for(pattern) {
                Ok(re) => {
                    let matched = scene.recompute_matches(|e| re.is_match(e.label()));
                    tracing::debug!(pattern, matched, "query applied");
                    QueryStatus::NotEmpty { matched }
                }
                Err(err) => {
                    tracing::warn!(pattern, error = %err, "ignoring invalid query pattern");
                    QueryStatus::Invalid(err)
                }
            }
        };
        pattern.clone_into(&mut self.last_pattern);
        self.last_status = status.clone();
        status
    }

    /// The pattern most recently passed to [`Self::apply_query`].
    #[must_use]
    pub fn last_pattern(&self) -> &str {
        &self.last_pattern
    }

    /// The status most recently returned by [`Self::apply_query`].
    #[must_use]
    pub fn last_status(&self) -> &QueryStatus {
        &self.last_status
    }

    /// Reuses the compiled regex when the pattern has not changed.
    fn regex_for(&mut self, pattern: &str) -> Result<Regex, InvalidPatternError> {
        if let Some(re) = &self.compiled
            && re.as_str() == pattern
        {
            return Ok(re.clone());
        }
        let re = compile(pattern)?;
        self.compiled = Some(re.clone());
        Ok(re)
    }
}

#[cfg(test)]
mod tests {
    use golddust_scene::{EntryId, Record};

    use super::*;

    fn animals() -> SceneModel {
        let mut scene = SceneModel::new();
        scene
            .load(vec![
                Record::new(0.0, 0.0, "cat"),
                Record::new(1.0, 0.0, "dog"),
                Record::new(2.0, 0.0, "bird"),
            ])
            .unwrap();
        scene
    }

    fn matched_labels(scene: &SceneModel) -> Vec<&str> {
        scene
            .iter()
            .filter(|(_, e)| e.matched())
            .map(|(_, e)| e.label())
            .collect()
    }

    #[test]
    fn anchored_pattern_matches_exactly_dog() {
        let mut scene = animals();
        let mut query = QueryEngine::new();
        let status = query.apply_query(&mut scene, "^d");

        assert_eq!(status, QueryStatus::NotEmpty { matched: 1 });
        assert_eq!(matched_labels(&scene), ["dog"]);
        assert_eq!(status.message(), "not empty");
    }

    #[test]
    fn unanchored_pattern_matches_anywhere() {
        let mut scene = animals();
        let mut query = QueryEngine::new();
        query.apply_query(&mut scene, "i");
        assert_eq!(matched_labels(&scene), ["bird"]);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let mut scene = animals();
        let mut query = QueryEngine::new();
        let status = query.apply_query(&mut scene, "CAT");
        assert_eq!(status, QueryStatus::NotEmpty { matched: 0 });
    }

    #[test]
    fn empty_query_resets_every_flag() {
        let mut scene = animals();
        scene.set_match(EntryId(0), true);
        scene.set_match(EntryId(2), true);

        let mut query = QueryEngine::new();
        let status = query.apply_query(&mut scene, "");
        assert_eq!(status, QueryStatus::Empty);
        assert_eq!(status.message(), "empty");
        assert_eq!(scene.matched_count(), 0);
    }

    #[test]
    fn invalid_pattern_leaves_flags_untouched() {
        let mut scene = animals();
        let mut query = QueryEngine::new();
        query.apply_query(&mut scene, "o");
        let before: Vec<bool> = scene.iter().map(|(_, e)| e.matched()).collect();
        let epoch = scene.match_epoch();

        let status = query.apply_query(&mut scene, "[");
        let QueryStatus::Invalid(err) = &status else {
            panic!("expected an invalid status, got {status:?}");
        };
        assert_eq!(err.pattern(), "[");
        assert!(status.message().starts_with("invalid pattern \"[\""));

        let after: Vec<bool> = scene.iter().map(|(_, e)| e.matched()).collect();
        assert_eq!(before, after);
        assert_eq!(scene.match_epoch(), epoch);
        assert_eq!(query.last_pattern(), "[");
        assert_eq!(query.last_status(), &status);
    }

    #[test]
    fn successful_query_bumps_epoch_each_time() {
        let mut scene = animals();
        let mut query = QueryEngine::new();
        let epoch = scene.match_epoch();
        query.apply_query(&mut scene, "d");
        query.apply_query(&mut scene, "d");
        assert_eq!(scene.match_epoch(), epoch + 2);
    }

    #[test]
    fn query_on_unpopulated_scene_is_harmless() {
        let mut scene = SceneModel::new();
        let mut query = QueryEngine::new();
        assert_eq!(
            query.apply_query(&mut scene, "x"),
            QueryStatus::NotEmpty { matched: 0 }
        );
    }

    #[test]
    fn compile_reports_pattern() {
        let err = compile("(").unwrap_err();
        assert_eq!(err.pattern(), "(");
        assert!(compile("a|b").is_ok());
    }
}
