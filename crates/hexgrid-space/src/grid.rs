//! Grid topology: the bounded, point-symmetric set of cells.

use crate::axial::HexLayout;
use crate::config::GridConfig;
use crate::error::GridError;
use glam::Vec2;
use hexgrid_core::{EntityKey, GridPos};
use indexmap::IndexMap;
use smallvec::SmallVec;

/// Contents of one grid cell: the entities occupying it, in insertion order.
#[derive(Clone, Debug)]
pub struct Cell<E> {
    pub(crate) entities: SmallVec<[E; 2]>,
}

impl<E> Default for Cell<E> {
    fn default() -> Self {
        Self {
            entities: SmallVec::new(),
        }
    }
}

impl<E> Cell<E> {
    /// Occupants in the order they were added.
    pub fn entities(&self) -> &[E] {
        &self.entities
    }

    /// Number of occupants.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// `true` when nothing occupies the cell.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// A bounded hexagonal grid with `width * height` cells centred on `(0, 0)`.
///
/// Rows run over `r` in `-height/2 ..= height/2`. Row `r` covers
/// `q` in `-width/2 - t ..= width/2 - t` with `t = r / 2` truncated toward
/// zero, so the column start shifts every other row and the shift is
/// mirrored about the centre row. The resulting cell set is closed under
/// negation: `p` valid implies `-p` valid.
///
/// Truncation gives rows `-1`, `0` and `1` the same shift of zero, so the
/// three centre rows share one `q` range and a height-3 grid is a plain
/// parallelogram. Strict every-other-row alternation cannot also be point
/// symmetric: from row `-h/2` to row `h/2` there are an even number of row
/// steps, so an alternating shift would end on the same parity it started
/// with and the top and bottom rows could not mirror each other.
///
/// The grid owns each cell's occupant list and the reverse entity index
/// (see [`add_entity_at`](Self::add_entity_at)). Topology is immutable after
/// construction. All queries take `&self`; only membership calls take
/// `&mut self`. There is no internal locking.
///
/// # Examples
///
/// ```
/// use hexgrid_core::{EntityId, GridPos};
/// use hexgrid_space::HexGrid;
///
/// let grid: HexGrid<EntityId> = HexGrid::new(5, 3, 1.0).unwrap();
/// assert_eq!(grid.cell_count(), 15);
/// assert!(grid.is_pos_valid(GridPos::new(2, 0)));
/// assert!(!grid.is_pos_valid(GridPos::new(3, 0)));
///
/// // Point symmetry about the centre.
/// for p in grid.positions() {
///     assert!(grid.is_pos_valid(-p));
/// }
///
/// // Even dimensions have no centre cell.
/// assert!(HexGrid::<EntityId>::new(4, 3, 1.0).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct HexGrid<E> {
    width: u32,
    height: u32,
    layout: HexLayout,
    pub(crate) cells: IndexMap<GridPos, Cell<E>>,
    pub(crate) index: IndexMap<E, SmallVec<[GridPos; 1]>>,
    /// Every valid cell, centre first, in ring order. Drives bulk placement.
    pub(crate) placement_order: Vec<GridPos>,
}

impl<E: EntityKey> HexGrid<E> {
    /// Build a grid of `width * height` cells whose hexagons are
    /// `hex_width` world units wide (flat to flat).
    ///
    /// Returns `Err(GridError::EvenDimension)` if either dimension is even,
    /// and the other [`GridConfig::validate`] errors for zero, oversized or
    /// non-finite parameters.
    pub fn new(width: u32, height: u32, hex_width: f32) -> Result<Self, GridError> {
        Self::from_config(&GridConfig {
            width,
            height,
            hex_width,
        })
    }

    /// Build a grid from a validated configuration.
    pub fn from_config(config: &GridConfig) -> Result<Self, GridError> {
        config.validate()?;

        let half_w = (config.width / 2) as i32;
        let half_h = (config.height / 2) as i32;
        let mut cells = IndexMap::with_capacity(config.cell_count());
        for r in -half_h..=half_h {
            let shift = r / 2;
            for q in (-half_w - shift)..=(half_w - shift) {
                cells.insert(GridPos::new(q, r), Cell::default());
            }
        }

        let first = cells.first().map(|(p, _)| *p).unwrap_or_default();
        let last = cells.last().map(|(p, _)| *p).unwrap_or_default();
        if last != -first {
            return Err(GridError::AsymmetricLayout { first, last });
        }

        let mut grid = Self {
            width: config.width,
            height: config.height,
            layout: HexLayout::from_hex_width(config.hex_width),
            cells,
            index: IndexMap::new(),
            placement_order: Vec::new(),
        };
        grid.placement_order = grid.spiral(GridPos::ORIGIN, grid.max_radius(), false);
        debug_assert_eq!(grid.placement_order.len(), grid.cells.len());

        log::debug!(
            "built {}x{} hex grid: {} cells, size {:.4}, first {first}, last {last}",
            grid.width,
            grid.height,
            grid.cells.len(),
            grid.layout.size(),
        );
        Ok(grid)
    }

    /// Cells per row.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// World conversion parameters.
    pub fn layout(&self) -> &HexLayout {
        &self.layout
    }

    /// Centre-to-corner distance of one hexagon.
    pub fn size(&self) -> f64 {
        self.layout.size()
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Hex distance from the centre to the farthest cell.
    pub fn max_radius(&self) -> u32 {
        let half_w = self.width / 2;
        let half_h = self.height / 2;
        // Outermost corners of the first and last rows, or the row ends
        // themselves on grids narrower than they are tall.
        (half_w + half_h - half_h / 2).max(half_h)
    }

    /// Whether `pos` is one of the cells generated at construction.
    pub fn is_pos_valid(&self, pos: GridPos) -> bool {
        self.cells.contains_key(&pos)
    }

    /// The cell at `pos`, or `None` off the grid.
    pub fn cell(&self, pos: GridPos) -> Option<&Cell<E>> {
        self.cells.get(&pos)
    }

    /// All valid positions in generation order (row by row, increasing `q`).
    pub fn positions(&self) -> impl Iterator<Item = GridPos> + '_ {
        self.cells.keys().copied()
    }

    /// Valid positions paired with their cells, in generation order.
    pub fn cells(&self) -> impl Iterator<Item = (GridPos, &Cell<E>)> + '_ {
        self.cells.iter().map(|(p, c)| (*p, c))
    }

    /// Call `f` once per valid position, in generation order.
    pub fn for_each_cell(&self, mut f: impl FnMut(GridPos)) {
        for pos in self.cells.keys() {
            f(*pos);
        }
    }

    /// The cell containing a world position (may be off the grid).
    pub fn position_to_grid_pos(&self, world: Vec2) -> GridPos {
        self.layout.to_grid_pos(world)
    }

    /// World position of a cell centre.
    pub fn grid_pos_to_position(&self, pos: GridPos) -> Vec2 {
        self.layout.to_world(pos)
    }
}
