// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use grove_layout::{DisplayList, LayoutParams, Tree};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

fn gen_random_keys(count: usize, seed: u64) -> Vec<u32> {
    let mut rng = Rng::new(seed);
    (0..count).map(|_| (rng.next_u64() >> 32) as u32).collect()
}

fn gen_sorted_keys(count: usize) -> Vec<u32> {
    (0..count as u32).collect()
}

fn empty() -> Tree<u32> {
    Tree::new()
}

fn build(keys: &[u32]) -> Tree<u32> {
    let mut tree = empty();
    tree.insert_all(keys.iter().copied());
    tree
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &n in &[256usize, 1024, 4096] {
        let keys = gen_random_keys(n, 0xCAFE_F00D_DEAD_BEEF);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("random_n{}", n), |b| {
            b.iter_batched(
                empty,
                |mut tree| {
                    tree.insert_all(keys.iter().copied());
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    let keys = gen_sorted_keys(1024);
    group.bench_function("sorted_chain_n1024", |b| {
        b.iter_batched(
            empty,
            |mut tree| {
                tree.insert_all(keys.iter().copied());
                black_box(tree.depth());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    for &n in &[256usize, 1024, 4096] {
        let mut tree = build(&gen_random_keys(n, 0xBADC_F00D_1234_5678));
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("random_n{}", n), |b| {
            b.iter(|| black_box(tree.layout().len()))
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    for &n in &[256usize, 1024] {
        let mut tree = build(&gen_random_keys(n, 0xC1A5_7E55_9999_ABCD));
        tree.set_surface(DisplayList::new());
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("display_list_n{}", n), |b| {
            b.iter(|| {
                tree.render();
                black_box(tree.surface().map(DisplayList::len));
            })
        });
    }
    // Ten parameter changes followed by one deferred redraw.
    let mut tree = build(&gen_random_keys(1024, 0xFACE_FEED_CAFE_BABE));
    tree.set_surface(DisplayList::new());
    group.bench_function("batched_params_n1024", |b| {
        b.iter(|| {
            for i in 0..10 {
                let _ = tree.set_params(LayoutParams {
                    diameter: 20.0 + f64::from(i),
                    ..*tree.params()
                });
            }
            black_box(tree.render_if_dirty());
        })
    });
    group.finish();
}

criterion_group!(benches, bench_insert, bench_layout, bench_render);
criterion_main!(benches);
