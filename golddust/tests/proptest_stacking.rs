// Copyright 2025 the Golddust Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based tests for query-driven highlighting and label stacking.
//!
//! After any sequence of queries:
//! 1. Every matched label is drawn above every unmatched label, and matched
//!    labels are stacked in load order.
//! 2. An entry is matched exactly when its label matches the last valid
//!    non-empty pattern.
//! 3. The backend holds one live label per entry.

use golddust::query::QueryStatus;
use golddust::{Config, Viewer};
use golddust_render_ref::RefBackend;
use proptest::prelude::*;
use regex::Regex;

const PATTERNS: &[&str] = &["", "a", "^b", "c$", "[ab]+", "a|c", "(", "^$", "b.c", "["];

fn json_of(labels: &[String]) -> Vec<u8> {
    let records: Vec<String> = labels
        .iter()
        .enumerate()
        .map(|(i, l)| format!(r#"{{"x": {i}, "y": 0, "word": "{l}"}}"#))
        .collect();
    format!("[{}]", records.join(",")).into_bytes()
}

fn labels_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[abc]{0,4}", 1..24)
}

proptest! {
    #[test]
    fn matched_labels_stay_on_top(
        labels in labels_strategy(),
        queries in prop::collection::vec(0..PATTERNS.len(), 1..12),
    ) {
        let mut viewer = Viewer::new(Config::default(), RefBackend::default());
        viewer.on_dataset_loaded(Ok(json_of(&labels))).unwrap();

        let mut effective: Option<Regex> = None;
        for index in queries {
            let pattern = PATTERNS[index];
            match viewer.on_query_changed(pattern) {
                QueryStatus::Empty => effective = None,
                QueryStatus::NotEmpty { .. } => effective = Some(Regex::new(pattern).unwrap()),
                QueryStatus::Invalid(_) => {}
            }

            let scene = viewer.scene();
            for (id, entry) in scene.iter() {
                let expected = effective.as_ref().is_some_and(|re| re.is_match(entry.label()));
                prop_assert_eq!(entry.matched(), expected, "entry {:?} {:?}", id, entry.label());
            }

            let backend = viewer.backend();
            prop_assert_eq!(backend.live_labels(), labels.len());
            let stack = backend.stack();
            let matched_count = scene.matched_count();
            let (bottom, top) = stack.split_at(stack.len() - matched_count);
            let expected_top: Vec<_> = scene
                .iter()
                .filter(|(_, e)| e.matched())
                .filter_map(|(_, e)| e.visual())
                .collect();
            prop_assert_eq!(top, expected_top.as_slice());
            for handle in bottom {
                let entry = scene.iter().find(|(_, e)| e.visual() == Some(*handle));
                prop_assert!(entry.is_some_and(|(_, e)| !e.matched()));
            }
        }
    }
}
