//! Core types for the hexgrid engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the axial coordinate type [`GridPos`], the six-direction adjacency
//! table shared by every algorithm in the workspace, and the identifier
//! bound the grid places on externally owned entities.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod id;
pub mod pos;

pub use id::{EntityId, EntityKey};
pub use pos::{GridPos, DIRECTIONS};
