//! Entity membership: which entities occupy which cells.
//!
//! Every cell keeps its occupants in insertion order, and the grid keeps a
//! reverse index from entity to the cells holding it. The two views are
//! updated together and always agree: `e` is in `entities_at(p)` exactly
//! when `p` is in `positions_of(e)`.

use crate::grid::HexGrid;
use hexgrid_core::{EntityKey, GridPos};

impl<E: EntityKey> HexGrid<E> {
    /// Place `entity` in the cell at `pos`.
    ///
    /// Returns `true` if the entity was added. Returns `false` (and leaves
    /// the grid untouched) when `pos` is off the grid or the entity is
    /// already in that cell. An entity may occupy several cells at once.
    ///
    /// Unlike a plain push onto the occupant list, adding the same entity
    /// to the same cell twice is refused: the second call returns `false`
    /// and the entity is still listed once.
    pub fn add_entity_at(&mut self, entity: E, pos: GridPos) -> bool {
        let Some(cell) = self.cells.get_mut(&pos) else {
            log::warn!("add_entity_at: {entity:?} at invalid position {pos}");
            return false;
        };
        if cell.entities.contains(&entity) {
            return false;
        }
        cell.entities.push(entity);
        self.index.entry(entity).or_default().push(pos);
        true
    }

    /// Take `entity` out of the cell at `pos`.
    ///
    /// Returns `false` when `pos` is off the grid or the entity was not
    /// there. Remaining occupants keep their relative order.
    pub fn remove_entity_from(&mut self, entity: E, pos: GridPos) -> bool {
        let Some(cell) = self.cells.get_mut(&pos) else {
            log::warn!("remove_entity_from: {entity:?} at invalid position {pos}");
            return false;
        };
        let Some(slot) = cell.entities.iter().position(|e| *e == entity) else {
            return false;
        };
        cell.entities.remove(slot);

        if let Some(held) = self.index.get_mut(&entity) {
            held.retain(|p| *p != pos);
            if held.is_empty() {
                self.index.shift_remove(&entity);
            }
        }
        true
    }

    /// Occupants of the cell at `pos`, in insertion order.
    ///
    /// Off-grid positions are logged and read as empty.
    pub fn entities_at(&self, pos: GridPos) -> &[E] {
        match self.cells.get(&pos) {
            Some(cell) => cell.entities(),
            None => {
                log::warn!("entities_at: invalid position {pos}");
                &[]
            }
        }
    }

    /// Cells currently holding `entity`, in the order it was placed.
    pub fn positions_of(&self, entity: E) -> &[GridPos] {
        self.index
            .get(&entity)
            .map(|held| held.as_slice())
            .unwrap_or(&[])
    }

    /// Remove `entity` from every cell, returning the cells it left.
    pub fn remove_entity(&mut self, entity: E) -> Vec<GridPos> {
        let Some(held) = self.index.shift_remove(&entity) else {
            return Vec::new();
        };
        for pos in &held {
            if let Some(cell) = self.cells.get_mut(pos) {
                cell.entities.retain(|e| *e != entity);
            }
        }
        held.into_vec()
    }

    /// Number of distinct entities on the grid.
    pub fn entity_count(&self) -> usize {
        self.index.len()
    }

    /// Place each entity in the first empty cell, walking outward from the
    /// centre in [`spiral`](Self::spiral) order.
    ///
    /// Entities already on the grid are left where they are. Duplicates in
    /// `entities` are placed once. When the grid runs out of empty cells the
    /// remaining entities are logged and left unplaced.
    ///
    /// Returns the placements made, in input order.
    pub fn auto_assign_entities(&mut self, entities: &[E]) -> Vec<(E, GridPos)> {
        let mut placed = Vec::with_capacity(entities.len());
        let mut cursor = 0;

        for (i, &entity) in entities.iter().enumerate() {
            if self.index.contains_key(&entity) {
                log::trace!("auto_assign: {entity:?} already placed, skipping");
                continue;
            }
            let free = self.placement_order[cursor..]
                .iter()
                .position(|pos| self.cells.get(pos).is_some_and(|c| c.is_empty()));
            let Some(offset) = free else {
                log::warn!(
                    "auto_assign: grid full, {} of {} entities not considered",
                    entities.len() - i,
                    entities.len()
                );
                break;
            };
            cursor += offset;
            let pos = self.placement_order[cursor];
            self.add_entity_at(entity, pos);
            placed.push((entity, pos));
        }

        log::debug!("auto_assign: placed {} entities", placed.len());
        placed
    }
}
