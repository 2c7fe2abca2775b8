// Copyright 2025 the Golddust Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use golddust_scene::{EntryId, SceneModel, VisualHandle};
use golddust_view2d::Viewport;
use kurbo::{Point, Vec2};
use peniko::Color;

use crate::backend::{LabelDesc, PointBatch, SceneBackend};
use crate::style::RenderStyle;

/// Counters describing what one [`RenderSync::update`] call did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// `false` when the scene was not populated and nothing happened.
    pub synced: bool,
    /// Labels created for entries that had none.
    pub created: usize,
    /// Labels destroyed because their entries were replaced.
    pub destroyed: usize,
    /// Whether the label draw order was rewritten.
    pub restacked: bool,
}

/// Synchronizes a [`SceneBackend`] with a [`SceneModel`] and [`Viewport`].
///
/// See the crate docs for the rendering strategy.
#[derive(Debug)]
pub struct RenderSync {
    style: RenderStyle,
    labels_visible: bool,
    applied_labels_visible: Option<bool>,
    applied_background: Option<Color>,
    /// Label stacking, bottom first.
    draw_order: Vec<EntryId>,
    seen_epoch: Option<u64>,
    unmatched_scratch: Vec<Point>,
    matched_scratch: Vec<Point>,
    handle_scratch: Vec<VisualHandle>,
}

impl Default for RenderSync {
    fn default() -> Self {
        Self::new(RenderStyle::default())
    }
}

impl RenderSync {
    /// Creates a synchronizer with the given style. Labels start hidden.
    #[must_use]
    pub fn new(style: RenderStyle) -> Self {
        Self {
            style,
            labels_visible: false,
            applied_labels_visible: None,
            applied_background: None,
            draw_order: Vec::new(),
            seen_epoch: None,
            unmatched_scratch: Vec::new(),
            matched_scratch: Vec::new(),
            handle_scratch: Vec::new(),
        }
    }

    /// Visual constants in use.
    #[must_use]
    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Whether labels are shown.
    #[must_use]
    pub fn labels_visible(&self) -> bool {
        self.labels_visible
    }

    /// Shows or hides labels; applied on the next update.
    pub fn set_labels_visible(&mut self, visible: bool) {
        self.labels_visible = visible;
    }

    /// Current label stacking, bottom first.
    #[must_use]
    pub fn draw_order(&self) -> &[EntryId] {
        &self.draw_order
    }

    /// Brings the backend in line with `scene` and `viewport`.
    ///
    /// Does nothing if the scene has not been populated yet.
    pub fn update<B: SceneBackend + ?Sized>(
        &mut self,
        scene: &mut SceneModel,
        viewport: &Viewport,
        backend: &mut B,
    ) -> SyncReport {
        if !scene.is_populated() {
            return SyncReport::default();
        }
        let mut report = SyncReport {
            synced: true,
            ..SyncReport::default()
        };

        let retired = scene.take_retired_visuals();
        report.destroyed = retired.len();
        for handle in retired {
            backend.destroy_label(handle);
        }
        report.created = self.build_missing_labels(scene, backend);

        if report.destroyed > 0 || report.created > 0 || self.draw_order.len() != scene.len() {
            self.draw_order = (0..scene.len()).map(EntryId).collect();
            self.seen_epoch = None;
        }

        let local_scale = viewport.inverse_linear_scale();
        self.draw_points(scene, local_scale, backend);
        self.place_labels(scene, local_scale, backend);

        if self.seen_epoch != Some(scene.match_epoch()) {
            self.restack(scene, backend);
            self.seen_epoch = Some(scene.match_epoch());
            report.restacked = true;
        }

        if self.applied_labels_visible != Some(self.labels_visible) {
            backend.set_labels_visible(self.labels_visible);
            self.applied_labels_visible = Some(self.labels_visible);
        }

        if self.applied_background != Some(self.style.background) {
            backend.set_background(self.style.background);
            self.applied_background = Some(self.style.background);
        }
        backend.set_layer_transform(viewport.layer_transform());

        if report.created > 0 || report.destroyed > 0 {
            tracing::debug!(
                created = report.created,
                destroyed = report.destroyed,
                "rebuilt scene labels"
            );
        }
        report
    }

    /// Destroys every primitive owned on behalf of `scene`.
    ///
    /// Used when the host tears the view down.
    pub fn teardown<B: SceneBackend + ?Sized>(&mut self, scene: &mut SceneModel, backend: &mut B) {
        let handles = scene.release_all_visuals();
        tracing::debug!(destroyed = handles.len(), "tearing down scene labels");
        for handle in handles {
            backend.destroy_label(handle);
        }
        backend.clear_points();
        self.draw_order.clear();
        self.seen_epoch = None;
        self.applied_labels_visible = None;
        self.applied_background = None;
    }

    fn build_missing_labels<B: SceneBackend + ?Sized>(
        &self,
        scene: &mut SceneModel,
        backend: &mut B,
    ) -> usize {
        let missing: Vec<(EntryId, LabelDesc)> = scene
            .iter()
            .filter(|(_, e)| e.visual().is_none())
            .map(|(id, e)| {
                let desc = LabelDesc {
                    text: e.label().to_owned(),
                    style: self.style.label_style(e.matched()).clone(),
                    anchor: Vec2::new(0.0, 0.5),
                };
                (id, desc)
            })
            .collect();
        let created = missing.len();
        for (id, desc) in missing {
            let handle = backend.create_label(desc);
            if let Some(stale) = scene.bind_visual(id, handle) {
                backend.destroy_label(stale);
            }
        }
        created
    }

    fn draw_points<B: SceneBackend + ?Sized>(
        &mut self,
        scene: &SceneModel,
        local_scale: f64,
        backend: &mut B,
    ) {
        self.unmatched_scratch.clear();
        self.matched_scratch.clear();
        for (_, entry) in scene.iter() {
            if entry.matched() {
                self.matched_scratch.push(entry.position());
            } else {
                self.unmatched_scratch.push(entry.position());
            }
        }

        let radius = self.style.base_radius * local_scale;
        backend.clear_points();
        backend.fill_points(PointBatch {
            positions: &self.unmatched_scratch,
            radius,
            style: self.style.point_style(false),
        });
        backend.fill_points(PointBatch {
            positions: &self.matched_scratch,
            radius,
            style: self.style.point_style(true),
        });
    }

    fn place_labels<B: SceneBackend + ?Sized>(
        &self,
        scene: &SceneModel,
        local_scale: f64,
        backend: &mut B,
    ) {
        let offset = Vec2::new(self.style.label_offset * local_scale, 0.0);
        for (_, entry) in scene.iter() {
            let Some(handle) = entry.visual() else {
                continue;
            };
            backend.set_label_transform(handle, entry.position() + offset, local_scale);
            backend.set_label_style(handle, self.style.label_style(entry.matched()));
        }
    }

    /// Unmatched labels keep their relative order; matched labels go on top
    /// in load order.
    fn restack<B: SceneBackend + ?Sized>(&mut self, scene: &SceneModel, backend: &mut B) {
        let is_matched = |id: &EntryId| scene.get(*id).is_some_and(|e| e.matched());
        let mut order: Vec<EntryId> = self
            .draw_order
            .iter()
            .copied()
            .filter(|id| !is_matched(id))
            .collect();
        order.extend(
            scene
                .iter()
                .filter(|(_, e)| e.matched())
                .map(|(id, _)| id),
        );
        self.draw_order = order;

        self.handle_scratch.clear();
        self.handle_scratch.extend(
            self.draw_order
                .iter()
                .filter_map(|id| scene.get(*id).and_then(|e| e.visual())),
        );
        backend.restack_labels(&self.handle_scratch);
    }
}

#[cfg(test)]
mod tests {
    use golddust_scene::Record;
    use kurbo::Affine;

    use super::*;
    use crate::style::TextStyle;

    /// Counts calls and remembers the last values it was given.
    #[derive(Default)]
    struct Counting {
        next: u32,
        live: Vec<VisualHandle>,
        order: Vec<VisualHandle>,
        passes: Vec<(usize, f64)>,
        layer: Option<Affine>,
        visible: Option<bool>,
        backgrounds: usize,
    }

    impl SceneBackend for Counting {
        fn create_label(&mut self, _desc: LabelDesc) -> VisualHandle {
            let handle = VisualHandle(self.next);
            self.next += 1;
            self.live.push(handle);
            handle
        }
        fn destroy_label(&mut self, handle: VisualHandle) {
            self.live.retain(|h| *h != handle);
        }
        fn set_label_transform(&mut self, _: VisualHandle, _: Point, _: f64) {}
        fn set_label_style(&mut self, _: VisualHandle, _: &TextStyle) {}
        fn restack_labels(&mut self, order: &[VisualHandle]) {
            self.order = order.to_vec();
        }
        fn set_labels_visible(&mut self, visible: bool) {
            self.visible = Some(visible);
        }
        fn clear_points(&mut self) {
            self.passes.clear();
        }
        fn fill_points(&mut self, batch: PointBatch<'_>) {
            self.passes.push((batch.positions.len(), batch.radius));
        }
        fn set_layer_transform(&mut self, transform: Affine) {
            self.layer = Some(transform);
        }
        fn set_background(&mut self, _: Color) {
            self.backgrounds += 1;
        }
    }

    fn scene_of(labels: &[&str]) -> SceneModel {
        let mut scene = SceneModel::new();
        scene
            .load(
                labels
                    .iter()
                    .enumerate()
                    .map(|(i, l)| Record::new(i as f64, 0.0, *l))
                    .collect(),
            )
            .unwrap();
        scene
    }

    #[test]
    fn unpopulated_scene_is_a_noop() {
        let mut sync = RenderSync::default();
        let mut backend = Counting::default();
        let report = sync.update(&mut SceneModel::new(), &Viewport::new(), &mut backend);

        assert_eq!(report, SyncReport::default());
        assert!(backend.layer.is_none());
        assert!(backend.passes.is_empty());
    }

    #[test]
    fn first_update_builds_everything() {
        let mut sync = RenderSync::default();
        let mut backend = Counting::default();
        let mut scene = scene_of(&["cat", "dog", "bird"]);

        let report = sync.update(&mut scene, &Viewport::new(), &mut backend);
        assert!(report.synced);
        assert_eq!(report.created, 3);
        assert!(report.restacked);
        assert_eq!(backend.live.len(), 3);
        assert_eq!(backend.visible, Some(false));
        assert!(scene.iter().all(|(_, e)| e.visual().is_some()));

        // A second update with nothing new creates nothing.
        let report = sync.update(&mut scene, &Viewport::new(), &mut backend);
        assert_eq!(report.created, 0);
        assert!(!report.restacked);
    }

    #[test]
    fn matched_points_are_drawn_in_the_second_pass() {
        let mut sync = RenderSync::default();
        let mut backend = Counting::default();
        let mut scene = scene_of(&["cat", "dog", "bird"]);
        scene.recompute_matches(|e| e.label() == "cat");

        let viewport = Viewport::with_scale(2.0);
        sync.update(&mut scene, &viewport, &mut backend);
        assert_eq!(backend.passes, vec![(2, 0.25), (1, 0.25)]);
    }

    #[test]
    fn restack_puts_matches_on_top() {
        let mut sync = RenderSync::default();
        let mut backend = Counting::default();
        let mut scene = scene_of(&["cat", "dog", "bird", "dingo"]);
        sync.update(&mut scene, &Viewport::new(), &mut backend);

        scene.recompute_matches(|e| e.label().starts_with('d'));
        sync.update(&mut scene, &Viewport::new(), &mut backend);
        assert_eq!(
            sync.draw_order(),
            &[EntryId(0), EntryId(2), EntryId(1), EntryId(3)]
        );
        assert_eq!(backend.order.len(), 4);
    }

    #[test]
    fn single_flag_change_restacks() {
        let mut sync = RenderSync::default();
        let mut backend = Counting::default();
        let mut scene = scene_of(&["cat", "dog", "bird"]);
        sync.update(&mut scene, &Viewport::new(), &mut backend);

        scene.set_match(EntryId(0), true);
        let report = sync.update(&mut scene, &Viewport::new(), &mut backend);
        assert!(report.restacked);
        assert_eq!(
            sync.draw_order(),
            &[EntryId(1), EntryId(2), EntryId(0)]
        );
        let cat = scene.get(EntryId(0)).and_then(|e| e.visual());
        assert_eq!(backend.order.last().copied(), cat);
    }

    #[test]
    fn background_is_pushed_once() {
        let mut sync = RenderSync::default();
        let mut backend = Counting::default();
        let mut scene = scene_of(&["cat"]);
        sync.update(&mut scene, &Viewport::new(), &mut backend);
        sync.update(&mut scene, &Viewport::with_scale(1.0), &mut backend);
        assert_eq!(backend.backgrounds, 1);

        sync.teardown(&mut scene, &mut backend);
        sync.update(&mut scene, &Viewport::new(), &mut backend);
        assert_eq!(backend.backgrounds, 2);
    }

    #[test]
    fn reload_destroys_old_labels() {
        let mut sync = RenderSync::default();
        let mut backend = Counting::default();
        let mut scene = scene_of(&["cat", "dog"]);
        sync.update(&mut scene, &Viewport::new(), &mut backend);

        scene.load(vec![Record::new(0.0, 0.0, "fish")]).unwrap();
        let report = sync.update(&mut scene, &Viewport::new(), &mut backend);
        assert_eq!(report.destroyed, 2);
        assert_eq!(report.created, 1);
        assert_eq!(backend.live, vec![VisualHandle(2)]);
        assert_eq!(sync.draw_order(), &[EntryId(0)]);
    }

    #[test]
    fn teardown_releases_everything() {
        let mut sync = RenderSync::default();
        let mut backend = Counting::default();
        let mut scene = scene_of(&["cat", "dog"]);
        sync.update(&mut scene, &Viewport::new(), &mut backend);

        sync.teardown(&mut scene, &mut backend);
        assert!(backend.live.is_empty());
        assert!(backend.passes.is_empty());
        assert!(sync.draw_order().is_empty());
    }
}
