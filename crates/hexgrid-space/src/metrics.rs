//! Adjacency and metrics: neighbours, distance, rings, spirals and lines.

use crate::axial::{cube_round, lerp_cube};
use crate::grid::HexGrid;
use glam::Vec2;
use hexgrid_core::{EntityKey, GridPos, DIRECTIONS};
use smallvec::SmallVec;

/// Offset applied to both line endpoints in cube space `[x, y, z]`.
///
/// Keeps interpolated samples off shared hex edges so rounding never lands
/// on an exact tie. Sums to zero, so the cube constraint still holds.
const LINE_NUDGE: [f64; 3] = [1e-6, -2e-6, 1e-6];

/// Direction index of the ring start corner (SW).
const RING_START_DIR: usize = 4;

impl<E: EntityKey> HexGrid<E> {
    /// The six cells adjacent to `pos`, in [`DIRECTIONS`] order
    /// (E, NE, NW, W, SW, SE).
    ///
    /// With `include_invalid == false` off-grid cells are dropped; with
    /// `true` all six are returned so callers can detect the grid edge.
    pub fn neighbors(&self, pos: GridPos, include_invalid: bool) -> SmallVec<[GridPos; 6]> {
        pos.neighbors()
            .into_iter()
            .filter(|n| include_invalid || self.is_pos_valid(*n))
            .collect()
    }

    /// Hex distance between two cells.
    ///
    /// Symmetric, zero iff `a == b`, and satisfies the triangle inequality.
    pub fn distance(a: GridPos, b: GridPos) -> u32 {
        a.distance(b)
    }

    /// Hex distance between the cells containing two world positions.
    pub fn world_distance(&self, a: Vec2, b: Vec2) -> u32 {
        Self::distance(self.position_to_grid_pos(a), self.position_to_grid_pos(b))
    }

    /// All cells at exactly `radius` from `center`.
    ///
    /// The walk starts at `center + DIRECTIONS[4] * radius` (the SW corner)
    /// and follows the six sides in [`DIRECTIONS`] order: E, NE, NW, W, SW,
    /// SE. That is counter-clockwise on a y-down screen. A full ring holds
    /// `6 * radius` cells; radius 0 yields `[center]`. Off-grid cells are
    /// skipped unless `include_invalid` is set; the order of the remaining
    /// cells is unchanged.
    ///
    /// A clipped ring that lies wholly outside the grid is answered without
    /// walking it. Cells whose coordinates fall outside the `i32` range are
    /// never returned.
    pub fn ring(&self, center: GridPos, radius: u32, include_invalid: bool) -> Vec<GridPos> {
        if radius == 0 {
            return if include_invalid || self.is_pos_valid(center) {
                vec![center]
            } else {
                Vec::new()
            };
        }
        if !include_invalid && radius > self.reach_from(center) {
            return Vec::new();
        }

        let mut out = Vec::with_capacity((radius as usize).saturating_mul(6).min(self.cell_count()));
        let step = i64::from(radius);
        let start = DIRECTIONS[RING_START_DIR];
        let mut q = i64::from(center.q) + i64::from(start.q) * step;
        let mut r = i64::from(center.r) + i64::from(start.r) * step;
        for dir in DIRECTIONS {
            for _ in 0..radius {
                if let (Ok(cq), Ok(cr)) = (i32::try_from(q), i32::try_from(r)) {
                    let cursor = GridPos::new(cq, cr);
                    if include_invalid || self.is_pos_valid(cursor) {
                        out.push(cursor);
                    }
                }
                q += i64::from(dir.q);
                r += i64::from(dir.r);
            }
        }
        out
    }

    /// Every cell within `radius` of `center`: rings 0 through `radius`
    /// concatenated, each in [`ring`](Self::ring) order.
    pub fn spiral(&self, center: GridPos, radius: u32, include_invalid: bool) -> Vec<GridPos> {
        let radius = if include_invalid {
            radius
        } else {
            radius.min(self.reach_from(center))
        };
        (0..=radius)
            .flat_map(|k| self.ring(center, k, include_invalid))
            .collect()
    }

    /// Largest distance from `center` at which a valid cell can lie.
    pub(crate) fn reach_from(&self, center: GridPos) -> u32 {
        self.max_radius()
            .saturating_add(center.distance(GridPos::ORIGIN))
    }

    /// The straight run of cells from `from` to `to`, both inclusive.
    ///
    /// Samples `N = distance(from, to)` evenly spaced points in cube space
    /// and rounds each one, giving `N + 1` cells where each is adjacent to
    /// the next. The cells are not checked against the grid bounds.
    pub fn line(&self, from: GridPos, to: GridPos) -> Vec<GridPos> {
        let n = Self::distance(from, to);
        if n == 0 {
            return vec![from];
        }
        let step = 1.0 / n as f64;
        (0..=n)
            .map(|i| {
                let [x, y, z] = lerp_cube(from, to, i as f64 * step);
                cube_round(x + LINE_NUDGE[0], y + LINE_NUDGE[1], z + LINE_NUDGE[2])
            })
            .collect()
    }
}
