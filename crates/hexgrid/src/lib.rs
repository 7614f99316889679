//! Hexgrid: a bounded hexagonal grid engine for turn-based tactics.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the hexgrid sub-crates. For most users, adding `hexgrid` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use hexgrid::prelude::*;
//!
//! // An 11x11 battlefield of unit-width hexes.
//! let mut grid: HexGrid<EntityId> = HexGrid::new(11, 11, 1.0).unwrap();
//!
//! // Drop three units near the centre.
//! let placed = grid.auto_assign_entities(&[EntityId(1), EntityId(2), EntityId(3)]);
//! assert_eq!(placed[0], (EntityId(1), GridPos::ORIGIN));
//!
//! // Occupied cells block movement; route around them.
//! let (_, blocker) = placed[1];
//! let path = grid.find_path(GridPos::ORIGIN, blocker * 3, false, &Occupancy);
//! assert!(!path.is_empty());
//! assert!(!path[1..].contains(&blocker));
//!
//! // Everything within 2 steps.
//! let range = grid.movement_range(GridPos::ORIGIN, 2, &Occupancy);
//! assert!(range.contains_key(&2));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `hexgrid-core` | `GridPos`, direction table, entity ids |
//! | [`space`] | `hexgrid-space` | Grid topology, metrics, traversal, membership |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates and entity identifiers (`hexgrid-core`).
///
/// [`types::GridPos`] is the axial cell coordinate used everywhere;
/// [`types::DIRECTIONS`] fixes the neighbour order.
pub use hexgrid_core as types;

/// The grid engine (`hexgrid-space`).
///
/// Provides [`space::HexGrid`] and the [`space::CellRules`] trait through
/// which callers describe terrain and occupancy.
pub use hexgrid_space as space;

/// Common imports for typical hexgrid usage.
///
/// ```rust
/// use hexgrid::prelude::*;
/// ```
pub mod prelude {
    // Coordinates
    pub use hexgrid_core::{EntityId, EntityKey, GridPos, DIRECTIONS};

    // Grid
    pub use hexgrid_space::{Cell, GridConfig, GridError, HexGrid, HexLayout, MovementRange};

    // Rules
    pub use hexgrid_space::{CellRules, Occupancy, OpenGround};
}
