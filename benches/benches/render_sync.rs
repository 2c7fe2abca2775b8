// Copyright 2025 the Golddust Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use golddust_render::RenderSync;
use golddust_render_ref::RefBackend;
use golddust_scene::{Record, SceneModel};
use golddust_view2d::Viewport;
use kurbo::Point;

fn build_scene(n: usize) -> SceneModel {
    let records = (0..n)
        .map(|i| {
            let t = i as f64 * 0.01;
            Record::new(t.cos() * t, t.sin() * t, format!("w{i}"))
        })
        .collect();
    let mut scene = SceneModel::new();
    scene.load(records).expect("generated positions are finite");
    scene
}

/// A scene whose labels already exist on the backend.
fn synced(n: usize) -> (SceneModel, RenderSync, RefBackend) {
    let mut scene = build_scene(n);
    let mut sync = RenderSync::default();
    let mut backend = RefBackend::default();
    sync.update(&mut scene, &Viewport::new(), &mut backend);
    backend.clear_events();
    (scene, sync, backend)
}

fn bench_render_sync(c: &mut Criterion) {
    let mut group = c.benchmark_group("golddust_render_sync");
    group.sample_size(30);

    for &n in &[1_000_usize, 10_000] {
        group.bench_function(format!("initial_build(n={n})"), |b| {
            b.iter_batched(
                || (build_scene(n), RenderSync::default(), RefBackend::default()),
                |(mut scene, mut sync, mut backend)| {
                    black_box(sync.update(&mut scene, &Viewport::new(), &mut backend));
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_function(format!("zoom_step(n={n})"), |b| {
            b.iter_batched(
                || synced(n),
                |(mut scene, mut sync, mut backend)| {
                    let mut viewport = Viewport::new();
                    viewport.zoom_by(-0.25, Point::new(400.0, 300.0));
                    black_box(sync.update(&mut scene, &viewport, &mut backend));
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_function(format!("restack_half_matched(n={n})"), |b| {
            b.iter_batched(
                || {
                    let (mut scene, sync, backend) = synced(n);
                    scene.recompute_matches(|entry| {
                        entry.label().ends_with(['0', '2', '4', '6', '8'])
                    });
                    (scene, sync, backend)
                },
                |(mut scene, mut sync, mut backend)| {
                    black_box(sync.update(&mut scene, &Viewport::new(), &mut backend));
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render_sync);
criterion_main!(benches);
