// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Benchmarks for the arrangement engine.
//!
//! The rank policy dominates the engine's cost (its subset search is a
//! dynamic program over the movable members), so the instances here scale
//! the movable pool while the other policies run on the same data for
//! comparison.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use muster_engine::arranger::{Arranger, Policy};
use muster_model::{entity::EntityStore, roster::Roster, rules::Rules};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

/// Builds a store and a roster pair with `n` members per side, ranks and
/// groups drawn from a fixed seed so runs are comparable.
fn build_instance(n: usize) -> (EntityStore, Rules, Roster, Roster) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut store = EntityStore::with_capacity(2 * n);
    let rules = Rules::default();

    let mut left = Roster::new();
    let mut right = Roster::new();
    for i in 0..2 * n {
        let rank = rng.gen_range(1..=100);
        let group = rng.gen_range(0..=4);
        let idx = store
            .create(format!("entity-{}", i), rank, group)
            .expect("names are unique");
        let roster = if i < n { &mut left } else { &mut right };
        roster
            .add(idx, &mut store, &rules)
            .expect("fresh members are addable");
    }

    (store, rules, left, right)
}

fn bench_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("arrange");

    for n in [8usize, 32, 128] {
        let (store, rules, left, right) = build_instance(n);

        for policy in [Policy::ByNumber, Policy::ByRank, Policy::ByGroup] {
            group.bench_with_input(
                BenchmarkId::new(policy.to_string(), n),
                &n,
                |b, _| {
                    b.iter(|| {
                        let mut store = store.clone();
                        let session = Arranger::new(
                            black_box(policy),
                            &rules,
                            left.clone(),
                            right.clone(),
                        )
                        .expect("inputs are valid");
                        black_box(session.arrange(&mut store).expect("arrangement runs"))
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_policies);
criterion_main!(benches);
