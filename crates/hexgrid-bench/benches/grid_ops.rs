//! Criterion micro-benchmarks for topology and metric operations.

use criterion::{criterion_group, criterion_main, Criterion};
use hexgrid_bench::reference_profile;
use hexgrid_core::{EntityId, GridPos};
use hexgrid_space::HexGrid;
use std::hint::black_box;

/// Benchmark: build a 101x101 grid from scratch.
fn bench_construct_101(c: &mut Criterion) {
    c.bench_function("construct_101x101", |b| {
        b.iter(|| {
            let grid: HexGrid<EntityId> = HexGrid::new(101, 101, 1.0).unwrap();
            black_box(grid);
        });
    });
}

/// Benchmark: call neighbors() on every cell of a 101x101 grid.
fn bench_neighbours_10k(c: &mut Criterion) {
    let (grid, _) = reference_profile(42);
    let cells: Vec<GridPos> = grid.positions().collect();

    c.bench_function("neighbours_10k", |b| {
        b.iter(|| {
            for pos in &cells {
                let n = grid.neighbors(*pos, false);
                black_box(&n);
            }
        });
    });
}

/// Benchmark: every ring out to radius 50 around the centre.
fn bench_rings_to_50(c: &mut Criterion) {
    let (grid, _) = reference_profile(42);

    c.bench_function("rings_to_50", |b| {
        b.iter(|| {
            for k in 0..=50 {
                black_box(grid.ring(GridPos::ORIGIN, k, false));
            }
        });
    });
}

/// Benchmark: 1000 lines between deterministic cell pairs.
fn bench_lines_1k(c: &mut Criterion) {
    let (grid, _) = reference_profile(42);
    let cells: Vec<GridPos> = grid.positions().collect();
    let n = cells.len() as u64;

    let mut pairs = Vec::with_capacity(1000);
    for i in 0u64..1000 {
        let a = (i.wrapping_mul(6364136223846793007) % n) as usize;
        let b = ((i + 500).wrapping_mul(1442695040888963407) % n) as usize;
        pairs.push((cells[a], cells[b]));
    }

    c.bench_function("lines_1k", |b| {
        b.iter(|| {
            for (from, to) in &pairs {
                black_box(grid.line(*from, *to));
            }
        });
    });
}

/// Benchmark: world position to cell for every cell centre.
fn bench_world_round_trip(c: &mut Criterion) {
    let (grid, _) = reference_profile(42);
    let world: Vec<_> = grid.positions().map(|p| grid.grid_pos_to_position(p)).collect();

    c.bench_function("world_to_grid_10k", |b| {
        b.iter(|| {
            for w in &world {
                black_box(grid.position_to_grid_pos(*w));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_construct_101,
    bench_neighbours_10k,
    bench_rings_to_50,
    bench_lines_1k,
    bench_world_round_trip
);
criterion_main!(benches);
