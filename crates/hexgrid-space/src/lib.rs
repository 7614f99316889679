//! Bounded hexagonal grid engine.
//!
//! This crate defines [`HexGrid`], a point-symmetric pointy-top hex tiling
//! built once from odd width/height, together with everything gameplay code
//! asks of it:
//!
//! - **Axial math** ([`HexLayout`]): world position to cell and back, cube rounding.
//! - **Topology**: validity testing and per-cell occupant lists ([`Cell`]).
//! - **Metrics**: neighbours, hex distance, rings, spirals and lines.
//! - **Traversal**: movement range, line of sight, view range and A* paths,
//!   all parameterised by caller-supplied [`CellRules`].
//! - **Membership**: the entity to cells index, including deterministic
//!   bulk placement.
//!
//! # Example
//!
//! ```
//! use hexgrid_core::{EntityId, GridPos};
//! use hexgrid_space::{HexGrid, OpenGround};
//!
//! let mut grid: HexGrid<EntityId> = HexGrid::new(5, 5, 1.0).unwrap();
//! assert_eq!(grid.neighbors(GridPos::ORIGIN, false).len(), 6);
//!
//! grid.add_entity_at(EntityId(7), GridPos::new(1, 0));
//! assert_eq!(grid.entities_at(GridPos::new(1, 0)), &[EntityId(7)]);
//!
//! let path = grid.find_path(GridPos::new(-2, 0), GridPos::new(2, 0), false, &OpenGround);
//! assert_eq!(path.len(), 5);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axial;
pub mod config;
pub mod error;
pub mod grid;
pub mod membership;
pub mod metrics;
pub mod rules;
pub mod traversal;

#[cfg(test)]
pub(crate) mod compliance;

pub use axial::HexLayout;
pub use config::GridConfig;
pub use error::GridError;
pub use grid::{Cell, HexGrid};
pub use rules::{CellRules, Occupancy, OpenGround};
pub use traversal::MovementRange;
