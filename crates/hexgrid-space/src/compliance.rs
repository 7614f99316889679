//! Grid invariant test helpers.
//!
//! These functions verify that a constructed [`HexGrid`] satisfies the
//! topology and metric invariants every query relies on. Reused by the
//! per-shape tests in `grid.rs` and the membership tests.

use crate::grid::HexGrid;
use hexgrid_core::{EntityId, GridPos};
use indexmap::IndexSet;

/// Assert that `distance(a, a) == 0` for all cells.
pub fn assert_distance_reflexive(grid: &HexGrid<EntityId>) {
    for pos in grid.positions() {
        let d = HexGrid::<EntityId>::distance(pos, pos);
        assert_eq!(d, 0, "distance({pos}, {pos}) = {d}, expected 0");
    }
}

/// Assert that `distance(a, b) == distance(b, a)` and that distinct cells
/// are at least 1 apart.
pub fn assert_distance_symmetric(grid: &HexGrid<EntityId>) {
    for a in grid.positions() {
        for b in grid.positions() {
            let dab = HexGrid::<EntityId>::distance(a, b);
            let dba = HexGrid::<EntityId>::distance(b, a);
            assert_eq!(dab, dba, "distance({a}, {b}) = {dab} != distance({b}, {a}) = {dba}");
            assert_eq!(dab == 0, a == b, "distance({a}, {b}) = {dab}");
        }
    }
}

/// Assert triangle inequality: `d(a, c) <= d(a, b) + d(b, c)` for all triples.
pub fn assert_distance_triangle_inequality(grid: &HexGrid<EntityId>) {
    let cells: Vec<GridPos> = grid.positions().collect();
    for a in &cells {
        for b in &cells {
            let dab = a.distance(*b);
            for c in &cells {
                let dac = a.distance(*c);
                let dbc = b.distance(*c);
                assert!(
                    dac <= dab + dbc,
                    "triangle inequality violated: d({a},{c})={dac} > d({a},{b})={dab} + d({b},{c})={dbc}"
                );
            }
        }
    }
}

/// Assert that `b in neighbors(a)` implies `a in neighbors(b)`, and that
/// every listed neighbour is valid and at distance 1.
pub fn assert_neighbours_symmetric(grid: &HexGrid<EntityId>) {
    for pos in grid.positions() {
        for nb in grid.neighbors(pos, false) {
            assert!(grid.is_pos_valid(nb), "invalid neighbour {nb} of {pos}");
            assert_eq!(pos.distance(nb), 1);
            assert!(
                grid.neighbors(nb, false).contains(&pos),
                "neighbour symmetry violated: {nb} in N({pos}) but {pos} not in N({nb})"
            );
        }
    }
}

/// Assert that filtered neighbours are exactly the valid subset of all
/// six, in the same order.
pub fn assert_neighbour_filtering(grid: &HexGrid<EntityId>) {
    for pos in grid.positions() {
        let all = grid.neighbors(pos, true);
        assert_eq!(all.len(), 6);
        let valid: Vec<GridPos> = all.into_iter().filter(|n| grid.is_pos_valid(*n)).collect();
        assert_eq!(grid.neighbors(pos, false).as_slice(), valid.as_slice(), "at {pos}");
    }
}

/// Assert that the cell set is closed under negation and that the first and
/// last generated cells mirror each other.
pub fn assert_point_symmetric(grid: &HexGrid<EntityId>) {
    for pos in grid.positions() {
        assert!(grid.is_pos_valid(-pos), "{pos} valid but {} is not", -pos);
    }
    let first = grid.positions().next();
    let last = grid.positions().last();
    assert_eq!(last, first.map(|p| -p), "first/last cells do not mirror");
}

/// Assert that every cell survives a world-space round trip.
pub fn assert_world_round_trip(grid: &HexGrid<EntityId>) {
    for pos in grid.positions() {
        let world = grid.grid_pos_to_position(pos);
        assert_eq!(
            grid.position_to_grid_pos(world),
            pos,
            "round trip of {pos} via {world} failed"
        );
    }
}

/// Assert that spiralling out from the centre to `max_radius` visits each
/// cell exactly once.
pub fn assert_spiral_covers_grid(grid: &HexGrid<EntityId>) {
    let spiral = grid.spiral(GridPos::ORIGIN, grid.max_radius(), false);
    assert_eq!(
        spiral.len(),
        grid.cell_count(),
        "spiral length ({}) != cell_count ({})",
        spiral.len(),
        grid.cell_count()
    );
    let unique: IndexSet<_> = spiral.iter().collect();
    assert_eq!(unique.len(), grid.cell_count(), "spiral has duplicates");
    assert_eq!(grid.placement_order, spiral, "placement order is not the spiral");
}

/// Assert that lines between any two cells run endpoint to endpoint through
/// adjacent cells.
pub fn assert_lines_contiguous(grid: &HexGrid<EntityId>) {
    for a in grid.positions() {
        for b in grid.positions() {
            let line = grid.line(a, b);
            assert_eq!(line.len() as u32, a.distance(b) + 1, "line {a} -> {b}");
            assert_eq!(line.first(), Some(&a));
            assert_eq!(line.last(), Some(&b));
            for pair in line.windows(2) {
                assert!(pair[0].is_adjacent(pair[1]), "line {a} -> {b} breaks at {}", pair[0]);
            }
        }
    }
}

/// Assert that the cell occupant lists and the entity index agree.
pub fn assert_index_consistent(grid: &HexGrid<EntityId>) {
    for (pos, cell) in grid.cells() {
        for e in cell.entities() {
            assert!(grid.positions_of(*e).contains(&pos), "{e} in {pos} but not indexed there");
        }
    }
    for (e, held) in &grid.index {
        assert!(!held.is_empty(), "{e} indexed with no cells");
        for pos in held {
            assert!(grid.entities_at(*pos).contains(e), "{e} indexed at {pos} but not in the cell");
        }
    }
}

/// Run all compliance checks on a grid.
pub fn run_full_compliance(grid: &HexGrid<EntityId>) {
    assert_distance_reflexive(grid);
    assert_distance_symmetric(grid);
    assert_distance_triangle_inequality(grid);
    assert_neighbours_symmetric(grid);
    assert_neighbour_filtering(grid);
    assert_point_symmetric(grid);
    assert_world_round_trip(grid);
    assert_spiral_covers_grid(grid);
    assert_lines_contiguous(grid);
    assert_index_consistent(grid);
}
