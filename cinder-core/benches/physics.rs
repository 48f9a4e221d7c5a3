#![allow(missing_docs)]
//! Benchmarks for explosion resolution and the leaf decay sweep.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use cinder_core::block::BlockId;
use cinder_core::config::{PhysicsConfig, PhysicsLevel};
use cinder_core::explosion::ExplosionRequest;
use cinder_core::physics::leaf_decay;
use cinder_core::world::{BlockStore, Dimensions, World};
use cinder_utils::BlockPos;

const SEED: u64 = 12345;
const SIZE: u16 = 64;

/// A world of solid stone below half height.
fn stone_world() -> World {
    let dims = Dimensions::new(SIZE, SIZE, SIZE).expect("valid dimensions");
    let half = dims.volume() / 2;
    let blocks = (0..dims.volume())
        .map(|index| if index < half { BlockId::STONE } else { BlockId::AIR })
        .collect();
    World::from_blocks(
        "bench",
        dims,
        blocks,
        PhysicsConfig::with_level(PhysicsLevel::Instant),
    )
    .expect("valid world")
    .with_seed(SEED)
}

fn bench_explosion(c: &mut Criterion) {
    let mut group = c.benchmark_group("explosion");
    let center = BlockPos::new(32, 31, 32);

    for power in [0, 1, 4] {
        group.bench_with_input(BenchmarkId::new("power", power), &power, |b, &power| {
            let mut world = stone_world();
            b.iter(|| {
                let summary = world.make_explosion(black_box(&ExplosionRequest::new(center, power)));
                world.discard_pending();
                black_box(summary)
            });
        });
    }

    group.finish();
}

/// A solid cube of leaves with a single trunk in one corner.
fn leaf_canopy(dims: Dimensions) -> BlockStore {
    let mut store = BlockStore::new(dims);
    for y in 20..29 {
        for z in 20..29 {
            for x in 20..29 {
                if let Some(index) = dims.to_index(x, y, z) {
                    store.set(index, BlockId::LEAF);
                }
            }
        }
    }
    if let Some(index) = dims.to_index(20, 20, 20) {
        store.set(index, BlockId::TRUNK);
    }
    store
}

fn bench_leaf_decay(c: &mut Criterion) {
    let dims = Dimensions::new(SIZE, SIZE, SIZE).expect("valid dimensions");
    let store = leaf_canopy(dims);
    let mut group = c.benchmark_group("leaf_decay");

    for radius in [4, 6] {
        group.bench_with_input(BenchmarkId::new("radius", radius), &radius, |b, &radius| {
            b.iter(|| {
                black_box(leaf_decay::is_disconnected(
                    dims,
                    &store,
                    black_box(BlockPos::new(24, 24, 24)),
                    radius,
                ))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_explosion, bench_leaf_decay);
criterion_main!(benches);
