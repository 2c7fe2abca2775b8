// Copyright 2025 the Golddust Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::dataset::{LoadError, Record, parse_records};
use crate::entry::{Entry, EntryId, VisualHandle};

/// Ordered collection of entries plus the bookkeeping the renderer needs.
///
/// Entries keep load order. Loading again replaces every entry; handles
/// bound to the old entries move to a retired list until the renderer
/// drains it with [`SceneModel::take_retired_visuals`].
#[derive(Clone, Debug, Default)]
pub struct SceneModel {
    entries: Vec<Entry>,
    populated: bool,
    retired: Vec<VisualHandle>,
    match_epoch: u64,
}

impl SceneModel {
    /// Creates an empty, unpopulated scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entry collection with `records`.
    ///
    /// On failure the scene is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NonFinitePosition`] if any record has a NaN or
    /// infinite coordinate.
    pub fn load(&mut self, records: Vec<Record>) -> Result<(), LoadError> {
        if let Some(index) = records
            .iter()
            .position(|r| !r.x.is_finite() || !r.y.is_finite())
        {
            return Err(LoadError::NonFinitePosition { index });
        }

        let retired_before = self.retired.len();
        self.retired
            .extend(self.entries.iter_mut().filter_map(|e| e.set_visual(None)));
        self.entries = records
            .into_iter()
            .map(|r| Entry::new(Point::new(r.x, r.y), r.word))
            .collect();
        self.populated = true;
        self.bump_match_epoch();

        tracing::info!(
            entries = self.entries.len(),
            retired = self.retired.len() - retired_before,
            "scene loaded"
        );
        Ok(())
    }

    /// Parses a JSON dataset and loads it, keeping at most `limit` records.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if the payload is malformed; the scene is
    /// left untouched.
    pub fn load_json(&mut self, bytes: &[u8], limit: Option<usize>) -> Result<(), LoadError> {
        let records = parse_records(bytes, limit)?;
        self.load(records)
    }

    /// Whether a dataset has been loaded.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.populated
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry with the given id.
    #[must_use]
    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.get(id.0)
    }

    /// All entries in load order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Iterates entries with their ids in load order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (EntryId, &Entry)> + '_ {
        self.entries.iter().enumerate().map(|(i, e)| (EntryId(i), e))
    }

    /// Calls `f` for every entry in load order.
    pub fn for_each_entry(&self, mut f: impl FnMut(EntryId, &Entry)) {
        for (id, entry) in self.iter() {
            f(id, entry);
        }
    }

    /// Sets one entry's match flag, returning `true` if it changed.
    ///
    /// A change bumps the match epoch. Unknown ids are ignored. This never
    /// touches visuals.
    pub fn set_match(&mut self, id: EntryId, matched: bool) -> bool {
        let changed = self
            .entries
            .get_mut(id.0)
            .is_some_and(|e| e.set_matched(matched));
        if changed {
            self.bump_match_epoch();
        }
        changed
    }

    /// Recomputes every match flag from `f` and bumps the match epoch.
    ///
    /// Returns the number of matched entries.
    pub fn recompute_matches(&mut self, mut f: impl FnMut(&Entry) -> bool) -> usize {
        let mut count = 0;
        for entry in &mut self.entries {
            let matched = f(entry);
            entry.set_matched(matched);
            count += usize::from(matched);
        }
        self.bump_match_epoch();
        count
    }

    /// Clears every match flag and bumps the match epoch.
    pub fn clear_matches(&mut self) {
        self.recompute_matches(|_| false);
    }

    /// Number of matched entries.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.entries.iter().filter(|e| e.matched()).count()
    }

    /// Counter bumped whenever the match flags were recomputed as a whole.
    #[must_use]
    pub fn match_epoch(&self) -> u64 {
        self.match_epoch
    }

    /// Marks the match flags as recomputed.
    pub fn bump_match_epoch(&mut self) {
        self.match_epoch = self.match_epoch.wrapping_add(1);
    }

    /// Binds a rendered label to an entry, returning the handle it replaces.
    ///
    /// Intended for the render synchronizer only.
    pub fn bind_visual(&mut self, id: EntryId, handle: VisualHandle) -> Option<VisualHandle> {
        self.entries
            .get_mut(id.0)
            .and_then(|e| e.set_visual(Some(handle)))
    }

    /// Drains handles whose entries were replaced by a reload.
    ///
    /// Intended for the render synchronizer only: every returned handle must
    /// be destroyed.
    pub fn take_retired_visuals(&mut self) -> Vec<VisualHandle> {
        core::mem::take(&mut self.retired)
    }

    /// Detaches every bound handle and returns it together with any retired
    /// ones, leaving the entries themselves in place.
    ///
    /// Used when the renderer is torn down.
    pub fn release_all_visuals(&mut self) -> Vec<VisualHandle> {
        let mut handles = self.take_retired_visuals();
        handles.extend(self.entries.iter_mut().filter_map(|e| e.set_visual(None)));
        handles
    }
}
