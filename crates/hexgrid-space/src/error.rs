//! Error types for grid construction.

use hexgrid_core::GridPos;
use std::fmt;

/// Errors arising from grid configuration or construction.
///
/// Only construction can fail. Queries against off-grid coordinates are
/// absorbed at the API boundary (logged, neutral result) and never surface
/// as a `GridError`.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// A dimension is even, so the tiling has no centre cell.
    EvenDimension {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The rejected value.
        value: u32,
    },
    /// A dimension exceeds the supported maximum.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The rejected value.
        value: u32,
        /// Maximum allowed value.
        max: u32,
    },
    /// The hexagon width is zero, negative, or not finite.
    InvalidHexWidth {
        /// The rejected value.
        value: f32,
    },
    /// Cell generation did not produce a point-symmetric tiling.
    AsymmetricLayout {
        /// First generated cell.
        first: GridPos,
        /// Last generated cell, expected to be `-first`.
        last: GridPos,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::EvenDimension { name, value } => {
                write!(f, "{name} must be odd, got {value}")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::InvalidHexWidth { value } => {
                write!(f, "hexagon width must be finite and positive, got {value}")
            }
            Self::AsymmetricLayout { first, last } => {
                write!(f, "incoherent first/last cell: first {first}, last {last}")
            }
        }
    }
}

impl std::error::Error for GridError {}
