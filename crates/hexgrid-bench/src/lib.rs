//! Benchmark profiles for the hexgrid engine.
//!
//! - [`reference_profile`]: 101x101 grid (~10K cells) with ~15% walls
//! - [`stress_profile`]: 317x317 grid (~100K cells), same wall density
//! - [`scatter_walls`]: deterministic wall placement via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use hexgrid_core::{EntityId, GridPos};
use hexgrid_space::HexGrid;
use hexgrid_test_utils::BlockedCells;

/// Wall density used by the canned profiles, in cells per thousand.
pub const WALL_PERMILLE: u64 = 150;

/// A 101x101 grid with scattered walls. The centre cell is always open.
pub fn reference_profile(seed: u64) -> (HexGrid<EntityId>, BlockedCells) {
    let grid = hexgrid_test_utils::grid(101, 101);
    let rules = scatter_walls(&grid, WALL_PERMILLE, seed);
    (grid, rules)
}

/// A 317x317 grid with the same wall density as [`reference_profile`].
pub fn stress_profile(seed: u64) -> (HexGrid<EntityId>, BlockedCells) {
    let grid = hexgrid_test_utils::grid(317, 317);
    let rules = scatter_walls(&grid, WALL_PERMILLE, seed);
    (grid, rules)
}

/// Pick roughly `permille / 1000` of the grid's cells as walls.
///
/// Deterministic for a given grid and seed. The centre cell is never a
/// wall so traversal benchmarks always have a valid start.
pub fn scatter_walls(grid: &HexGrid<EntityId>, permille: u64, seed: u64) -> BlockedCells {
    let walls = grid
        .positions()
        .enumerate()
        .filter(|(i, pos)| {
            let h = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add((*i as u64).wrapping_mul(1442695040888963407));
            *pos != GridPos::ORIGIN && (h >> 33) % 1000 < permille
        })
        .map(|(_, pos)| pos);
    BlockedCells::new().with_walls(walls)
}

/// The cell farthest east on the centre row.
pub fn east_edge(grid: &HexGrid<EntityId>) -> GridPos {
    GridPos::new((grid.width() / 2) as i32, 0)
}
