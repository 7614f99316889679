//! Test utilities and fixtures for hexgrid development.
//!
//! Provides a configurable [`BlockedCells`] rule set for exercising the
//! traversal algorithms, plus canned grid constructors used by the
//! integration tests and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::{HashMap, HashSet};

use hexgrid_core::{EntityId, GridPos};
use hexgrid_space::{CellRules, HexGrid};

/// Cell rules backed by explicit position sets.
///
/// Cells in `walls` block both movement and sight; cells in `fog` block
/// sight only. Per-cell step costs default to 1. When `occupants_block` is
/// set, any occupied cell also blocks movement.
#[derive(Clone, Debug, Default)]
pub struct BlockedCells {
    pub walls: HashSet<GridPos>,
    pub fog: HashSet<GridPos>,
    pub costs: HashMap<GridPos, u32>,
    pub occupants_block: bool,
}

impl BlockedCells {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_walls(mut self, cells: impl IntoIterator<Item = GridPos>) -> Self {
        self.walls.extend(cells);
        self
    }

    pub fn with_fog(mut self, cells: impl IntoIterator<Item = GridPos>) -> Self {
        self.fog.extend(cells);
        self
    }

    pub fn with_cost(mut self, pos: GridPos, cost: u32) -> Self {
        self.costs.insert(pos, cost);
        self
    }

    pub fn blocking_occupants(mut self) -> Self {
        self.occupants_block = true;
        self
    }
}

impl<E> CellRules<E> for BlockedCells {
    fn is_path_blocked(&self, pos: GridPos, occupants: &[E]) -> bool {
        self.walls.contains(&pos) || (self.occupants_block && !occupants.is_empty())
    }

    fn is_visibility_blocked(&self, pos: GridPos, _occupants: &[E]) -> bool {
        self.walls.contains(&pos) || self.fog.contains(&pos)
    }

    fn step_cost(&self, pos: GridPos, _occupants: &[E]) -> u32 {
        self.costs.get(&pos).copied().unwrap_or(1)
    }
}

/// An `w x h` grid at unit hex width.
///
/// # Panics
///
/// Panics if either dimension is even or zero.
pub fn grid(width: u32, height: u32) -> HexGrid<EntityId> {
    HexGrid::new(width, height, 1.0).expect("test grid dimensions must be odd and non-zero")
}

/// The default 11 x 11 battlefield.
pub fn battlefield() -> HexGrid<EntityId> {
    grid(11, 11)
}

/// A straight wall along row `r = 0` from `q = from` to `q = to` inclusive,
/// leaving every other cell open.
pub fn wall_row(from: i32, to: i32) -> Vec<GridPos> {
    (from..=to).map(|q| GridPos::new(q, 0)).collect()
}

/// `count` sequential entity ids starting at 0.
pub fn entity_ids(count: u32) -> Vec<EntityId> {
    (0..count).map(EntityId).collect()
}
