//! Traversal algorithms: movement range, line of sight, view range, paths.
//!
//! Every algorithm here reads the grid and the caller's [`CellRules`] and
//! never mutates either. Off-grid start or target positions are logged and
//! answered with an empty result.

use crate::grid::HexGrid;
use crate::rules::CellRules;
use hexgrid_core::{EntityKey, GridPos};
use pathfinding::prelude::astar;
use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap, VecDeque};

/// Cells reachable within a movement budget, bucketed by minimum cost.
pub type MovementRange = BTreeMap<u32, Vec<GridPos>>;

impl<E: EntityKey> HexGrid<E> {
    /// Index into [`line(p1, p2)`](Self::line) of the first cell strictly
    /// between the endpoints that blocks visibility.
    ///
    /// `None` means the line is clear. The endpoints themselves never
    /// occlude: a wall is visible, it just hides what lies behind it.
    pub fn can_draw_line<R: CellRules<E> + ?Sized>(
        &self,
        p1: GridPos,
        p2: GridPos,
        rules: &R,
    ) -> Option<usize> {
        let line = self.line(p1, p2);
        let interior = line.len().saturating_sub(2);
        line.iter()
            .enumerate()
            .skip(1)
            .take(interior)
            .find(|(_, pos)| self.is_visibility_blocked_at(**pos, rules))
            .map(|(i, _)| i)
    }

    /// Flood fill from `start`, bucketing every reachable cell by the
    /// cheapest total [`step_cost`](CellRules::step_cost) to reach it.
    ///
    /// `start` is in bucket 0. Cells whose cost would exceed `movement` are
    /// not reached, and path-blocked cells are never entered. Each cell
    /// appears exactly once. Within a bucket, cells are listed in the order
    /// they were settled, which follows neighbour order from the cells
    /// settled before them.
    ///
    /// A budget of `m + 1` always reaches a superset of what `m` reaches.
    pub fn movement_range<R: CellRules<E> + ?Sized>(
        &self,
        start: GridPos,
        movement: u32,
        rules: &R,
    ) -> MovementRange {
        let mut range = MovementRange::new();
        if !self.is_pos_valid(start) {
            log::warn!("movement_range from invalid position {start}");
            return range;
        }

        let mut best: HashMap<GridPos, u32> = HashMap::new();
        // Bucket queue keyed by accumulated cost; costs are small integers.
        let mut frontier: BTreeMap<u32, VecDeque<GridPos>> = BTreeMap::new();
        best.insert(start, 0);
        frontier.entry(0).or_default().push_back(start);

        while let Some((cost, mut bucket)) = frontier.pop_first() {
            while let Some(pos) = bucket.pop_front() {
                if best.get(&pos).is_some_and(|&b| b < cost) {
                    continue;
                }
                range.entry(cost).or_default().push(pos);

                for next in self.neighbors(pos, false) {
                    if self.is_path_blocked_at(next, rules) {
                        continue;
                    }
                    let next_cost = cost.saturating_add(self.step_cost_at(next, rules));
                    if next_cost > movement {
                        continue;
                    }
                    match best.entry(next) {
                        Entry::Occupied(mut e) => {
                            if *e.get() <= next_cost {
                                continue;
                            }
                            e.insert(next_cost);
                        }
                        Entry::Vacant(e) => {
                            e.insert(next_cost);
                        }
                    }
                    frontier.entry(next_cost).or_default().push_back(next);
                }
            }
        }

        log::trace!(
            "movement_range from {start} budget {movement}: {} cells in {} buckets",
            best.len(),
            range.len()
        );
        range
    }

    /// Cells within `size - 1` of `center` with a clear line of sight.
    ///
    /// Walks rings 0 through `size - 1` in [`ring`](Self::ring) order and keeps
    /// every cell for which [`can_draw_line`](Self::can_draw_line) finds no
    /// occluder. `size == 0` sees nothing; `size == 1` sees only `center`.
    pub fn view_range<R: CellRules<E> + ?Sized>(
        &self,
        center: GridPos,
        size: u32,
        rules: &R,
    ) -> Vec<GridPos> {
        if !self.is_pos_valid(center) {
            log::warn!("view_range from invalid position {center}");
            return Vec::new();
        }
        let last = size.min(self.reach_from(center).saturating_add(1));
        (0..last)
            .flat_map(|d| self.ring(center, d, false))
            .filter(|cell| self.can_draw_line(center, *cell, rules).is_none())
            .collect()
    }

    /// Cheapest path from `from` to `to`, both inclusive.
    ///
    /// A* over the six-connected grid, weighted by
    /// [`step_cost`](CellRules::step_cost) with hex distance as the heuristic.
    /// The path never enters a path-blocked cell, except that `to` itself
    /// may be blocked when `ignore_blocked_end` is set (approach an occupied
    /// target). `from` is never tested for blocking.
    ///
    /// Returns an empty vector when either endpoint is off the grid, when
    /// `to` is blocked and not ignored, or when no route exists.
    pub fn find_path<R: CellRules<E> + ?Sized>(
        &self,
        from: GridPos,
        to: GridPos,
        ignore_blocked_end: bool,
        rules: &R,
    ) -> Vec<GridPos> {
        if !self.is_pos_valid(from) || !self.is_pos_valid(to) {
            log::warn!("find_path between invalid positions {from} -> {to}");
            return Vec::new();
        }
        if !ignore_blocked_end && self.is_path_blocked_at(to, rules) {
            log::debug!("find_path {from} -> {to}: destination blocked");
            return Vec::new();
        }

        let result = astar(
            &from,
            |&pos| {
                self.neighbors(pos, false)
                    .into_iter()
                    .filter(|&next| {
                        (ignore_blocked_end && next == to) || !self.is_path_blocked_at(next, rules)
                    })
                    .map(|next| (next, self.step_cost_at(next, rules)))
                    .collect::<Vec<_>>()
            },
            |&pos| pos.distance(to),
            |&pos| pos == to,
        );

        match result {
            Some((path, cost)) => {
                log::trace!("find_path {from} -> {to}: {} steps, cost {cost}", path.len() - 1);
                path
            }
            None => {
                log::debug!("find_path {from} -> {to}: no route");
                Vec::new()
            }
        }
    }
}
