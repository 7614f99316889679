//! Per-cell movement and visibility rules supplied by game state.
//!
//! The grid knows which entities sit in which cell, but not what they mean.
//! Terrain, walls and units are the caller's business: traversal algorithms
//! ask a [`CellRules`] implementation whether a cell blocks movement or
//! sight and what it costs to enter. Implementations must behave as pure
//! functions of the cell's state at call time.

use crate::grid::HexGrid;
use hexgrid_core::{EntityKey, GridPos};

/// Blocking predicates and step costs for traversal.
///
/// `occupants` is the cell's current entity list, in insertion order.
/// Rules are only consulted for valid cells; off-grid cells always block.
pub trait CellRules<E> {
    /// Whether movement may not enter this cell.
    fn is_path_blocked(&self, pos: GridPos, occupants: &[E]) -> bool;

    /// Whether this cell blocks line of sight through it.
    fn is_visibility_blocked(&self, pos: GridPos, occupants: &[E]) -> bool;

    /// Cost of stepping into this cell. Values below 1 are treated as 1.
    fn step_cost(&self, _pos: GridPos, _occupants: &[E]) -> u32 {
        1
    }
}

impl<E, R: CellRules<E> + ?Sized> CellRules<E> for &R {
    fn is_path_blocked(&self, pos: GridPos, occupants: &[E]) -> bool {
        (**self).is_path_blocked(pos, occupants)
    }

    fn is_visibility_blocked(&self, pos: GridPos, occupants: &[E]) -> bool {
        (**self).is_visibility_blocked(pos, occupants)
    }

    fn step_cost(&self, pos: GridPos, occupants: &[E]) -> u32 {
        (**self).step_cost(pos, occupants)
    }
}

/// Nothing blocks and every step costs 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpenGround;

impl<E> CellRules<E> for OpenGround {
    fn is_path_blocked(&self, _pos: GridPos, _occupants: &[E]) -> bool {
        false
    }

    fn is_visibility_blocked(&self, _pos: GridPos, _occupants: &[E]) -> bool {
        false
    }
}

/// Any occupied cell blocks movement; nothing blocks sight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Occupancy;

impl<E> CellRules<E> for Occupancy {
    fn is_path_blocked(&self, _pos: GridPos, occupants: &[E]) -> bool {
        !occupants.is_empty()
    }

    fn is_visibility_blocked(&self, _pos: GridPos, _occupants: &[E]) -> bool {
        false
    }
}

impl<E: EntityKey> HexGrid<E> {
    /// Whether movement may not enter `pos`. Off-grid cells are blocked.
    pub fn is_path_blocked_at<R: CellRules<E> + ?Sized>(&self, pos: GridPos, rules: &R) -> bool {
        match self.cells.get(&pos) {
            Some(cell) => rules.is_path_blocked(pos, cell.entities()),
            None => true,
        }
    }

    /// Whether `pos` blocks line of sight. Off-grid cells are blocked.
    pub fn is_visibility_blocked_at<R: CellRules<E> + ?Sized>(
        &self,
        pos: GridPos,
        rules: &R,
    ) -> bool {
        match self.cells.get(&pos) {
            Some(cell) => rules.is_visibility_blocked(pos, cell.entities()),
            None => true,
        }
    }

    /// Cost of stepping into `pos`, at least 1. Off-grid cells cost 1.
    pub(crate) fn step_cost_at<R: CellRules<E> + ?Sized>(&self, pos: GridPos, rules: &R) -> u32 {
        self.cells
            .get(&pos)
            .map_or(1, |cell| rules.step_cost(pos, cell.entities()))
            .max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexgrid_core::EntityId;

    struct Walls(Vec<GridPos>);

    impl CellRules<EntityId> for Walls {
        fn is_path_blocked(&self, pos: GridPos, _occupants: &[EntityId]) -> bool {
            self.0.contains(&pos)
        }

        fn is_visibility_blocked(&self, pos: GridPos, _occupants: &[EntityId]) -> bool {
            self.0.contains(&pos)
        }

        fn step_cost(&self, _pos: GridPos, _occupants: &[EntityId]) -> u32 {
            0
        }
    }

    #[test]
    fn off_grid_is_blocked() {
        let g: HexGrid<EntityId> = HexGrid::new(3, 3, 1.0).unwrap();
        let far = GridPos::new(10, 10);
        assert!(g.is_path_blocked_at(far, &OpenGround));
        assert!(g.is_visibility_blocked_at(far, &OpenGround));
        assert!(!g.is_path_blocked_at(GridPos::ORIGIN, &OpenGround));
    }

    #[test]
    fn occupancy_blocks_movement_only() {
        let mut g: HexGrid<EntityId> = HexGrid::new(3, 3, 1.0).unwrap();
        let pos = GridPos::new(1, 0);
        assert!(!g.is_path_blocked_at(pos, &Occupancy));
        g.add_entity_at(EntityId(1), pos);
        assert!(g.is_path_blocked_at(pos, &Occupancy));
        assert!(!g.is_visibility_blocked_at(pos, &Occupancy));
    }

    #[test]
    fn custom_rules_through_reference_and_dyn() {
        let g: HexGrid<EntityId> = HexGrid::new(3, 3, 1.0).unwrap();
        let walls = Walls(vec![GridPos::new(0, 1)]);
        let by_ref: &dyn CellRules<EntityId> = &walls;
        assert!(g.is_path_blocked_at(GridPos::new(0, 1), by_ref));
        assert!(g.is_visibility_blocked_at(GridPos::new(0, 1), &&walls));
        assert!(!g.is_path_blocked_at(GridPos::new(1, 0), by_ref));
    }

    #[test]
    fn step_cost_is_clamped_to_one() {
        let g: HexGrid<EntityId> = HexGrid::new(3, 3, 1.0).unwrap();
        let walls = Walls(Vec::new());
        assert_eq!(g.step_cost_at(GridPos::ORIGIN, &walls), 1);
        assert_eq!(g.step_cost_at(GridPos::ORIGIN, &OpenGround), 1);
    }
}
