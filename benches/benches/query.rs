// Copyright 2025 the Golddust Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use golddust_query::QueryEngine;
use golddust_scene::{Record, SceneModel};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }
}

fn random_word(rng: &mut Lcg) -> String {
    let len = 3 + (rng.next_u32() % 8) as usize;
    (0..len)
        .map(|_| char::from(b'a' + (rng.next_u32() % 26) as u8))
        .collect()
}

fn build_scene(n: usize, seed: u64) -> SceneModel {
    let mut rng = Lcg(seed);
    let records = (0..n)
        .map(|i| Record::new(i as f64, -(i as f64), random_word(&mut rng)))
        .collect();
    let mut scene = SceneModel::new();
    scene.load(records).expect("generated positions are finite");
    scene
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("golddust_query");
    group.sample_size(50);

    for &n in &[1_000_usize, 10_000, 100_000] {
        for pattern in ["^d", "a.*z", "(ing|ed)$"] {
            group.bench_function(format!("rescan(n={n},pattern={pattern})"), |b| {
                b.iter_batched(
                    || (build_scene(n, 0x6D_0000_0001), QueryEngine::new()),
                    |(mut scene, mut engine)| {
                        let status = engine.apply_query(&mut scene, pattern);
                        black_box(status);
                    },
                    BatchSize::LargeInput,
                );
            });
        }

        // One rescan per keystroke.
        group.bench_function(format!("incremental_typing(n={n})"), |b| {
            b.iter_batched(
                || (build_scene(n, 0x6D_0000_0002), QueryEngine::new()),
                |(mut scene, mut engine)| {
                    for pattern in ["q", "qu", "qua", "quar"] {
                        black_box(engine.apply_query(&mut scene, pattern));
                    }
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_query);
criterion_main!(benches);
