//! Grid construction parameters and their validation.

use crate::error::GridError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Construction parameters for a [`HexGrid`](crate::HexGrid).
///
/// Both dimensions must be odd so the tiling has a centre cell and is
/// point-symmetric about it. Grid extents are fixed for the lifetime of
/// the grid; there is no resize.
///
/// # Examples
///
/// ```
/// use hexgrid_space::{GridConfig, GridError};
///
/// let config = GridConfig { width: 9, height: 7, ..GridConfig::default() };
/// assert!(config.validate().is_ok());
///
/// let even = GridConfig { width: 8, ..config };
/// assert!(matches!(even.validate(), Err(GridError::EvenDimension { name: "width", .. })));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridConfig {
    /// Cells per row. Must be odd. Default: 11.
    pub width: u32,
    /// Number of rows. Must be odd. Default: 11.
    pub height: u32,
    /// Flat-to-flat width of one hexagon in world units. Default: 1.0.
    pub hex_width: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 11,
            height: 11,
            hex_width: 1.0,
        }
    }
}

impl GridConfig {
    /// Largest accepted width or height.
    ///
    /// Keeps every cell centre exactly representable as an `f32` world
    /// position at unit hex width.
    pub const MAX_DIM: u32 = 16_383;

    /// Check structural invariants without building the grid.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.width == 0 || self.height == 0 {
            return Err(GridError::EmptyGrid);
        }
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value % 2 == 0 {
                return Err(GridError::EvenDimension { name, value });
            }
            if value > Self::MAX_DIM {
                return Err(GridError::DimensionTooLarge {
                    name,
                    value,
                    max: Self::MAX_DIM,
                });
            }
        }
        if !self.hex_width.is_finite() || self.hex_width <= 0.0 {
            return Err(GridError::InvalidHexWidth {
                value: self.hex_width,
            });
        }
        Ok(())
    }

    /// Number of cells the grid will hold.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(GridConfig::default().validate().is_ok());
        assert_eq!(GridConfig::default().cell_count(), 121);
    }

    #[test]
    fn zero_dimension_is_empty() {
        let c = GridConfig {
            width: 0,
            ..GridConfig::default()
        };
        assert_eq!(c.validate(), Err(GridError::EmptyGrid));
        let c = GridConfig {
            height: 0,
            ..GridConfig::default()
        };
        assert_eq!(c.validate(), Err(GridError::EmptyGrid));
    }

    #[test]
    fn even_dimensions_rejected() {
        let c = GridConfig {
            width: 4,
            ..GridConfig::default()
        };
        assert_eq!(
            c.validate(),
            Err(GridError::EvenDimension {
                name: "width",
                value: 4
            })
        );
        let c = GridConfig {
            height: 10,
            ..GridConfig::default()
        };
        assert_eq!(
            c.validate(),
            Err(GridError::EvenDimension {
                name: "height",
                value: 10
            })
        );
    }

    #[test]
    fn oversized_dimension_rejected() {
        let c = GridConfig {
            width: GridConfig::MAX_DIM + 2,
            ..GridConfig::default()
        };
        assert!(matches!(
            c.validate(),
            Err(GridError::DimensionTooLarge { name: "width", .. })
        ));
        let c = GridConfig {
            width: GridConfig::MAX_DIM,
            height: 1,
            hex_width: 1.0,
        };
        assert!(c.validate().is_ok());
    }

    #[test]
    fn bad_hex_width_rejected() {
        for hex_width in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let c = GridConfig {
                hex_width,
                ..GridConfig::default()
            };
            assert!(
                matches!(c.validate(), Err(GridError::InvalidHexWidth { .. })),
                "hex_width {hex_width} accepted"
            );
        }
    }

    #[test]
    fn single_cell_is_valid() {
        let c = GridConfig {
            width: 1,
            height: 1,
            hex_width: 0.5,
        };
        assert!(c.validate().is_ok());
    }
}
