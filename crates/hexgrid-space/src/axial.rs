//! World-space conversion for pointy-top axial coordinates.
//!
//! World `x` grows to the east and world `y` grows with `r` (south on
//! screen). The centre cell `(0, 0)` sits at the world origin.

use glam::Vec2;
use hexgrid_core::GridPos;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Affine matrices for pointy-top orientation:
/// (forward axial -> world, inverse world -> axial), row-major 2x2.
const ORIENTATION: ([f64; 4], [f64; 4]) = (
    [SQRT_3, SQRT_3 / 2.0, 0.0, 3.0 / 2.0],
    [SQRT_3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0],
);

/// Conversion between world positions and grid cells for one hex size.
///
/// `size` is the centre-to-corner distance of a hexagon. It is derived from
/// the flat-to-flat hexagon width the grid was built with:
/// `height = width / (sqrt(3) / 2)`, `size = height / 2`.
///
/// # Examples
///
/// ```
/// use glam::Vec2;
/// use hexgrid_core::GridPos;
/// use hexgrid_space::HexLayout;
///
/// let layout = HexLayout::from_hex_width(1.0);
/// let p = GridPos::new(3, -2);
/// assert_eq!(layout.to_grid_pos(layout.to_world(p)), p);
/// assert_eq!(layout.to_grid_pos(Vec2::new(0.1, -0.1)), GridPos::ORIGIN);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexLayout {
    size: f64,
}

impl HexLayout {
    /// Build a layout from the flat-to-flat width of one hexagon.
    pub fn from_hex_width(hex_width: f32) -> Self {
        let hex_height = hex_width as f64 / (SQRT_3 * 0.5);
        Self {
            size: hex_height * 0.5,
        }
    }

    /// Centre-to-corner distance of one hexagon.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Flat-to-flat width of one hexagon (horizontal spacing between cells).
    pub fn hex_width(&self) -> f64 {
        self.size * SQRT_3
    }

    /// Corner-to-corner height of one hexagon.
    pub fn hex_height(&self) -> f64 {
        self.size * 2.0
    }

    /// World position of a cell centre.
    pub fn to_world(&self, pos: GridPos) -> Vec2 {
        let (f, _) = ORIENTATION;
        let q = pos.q as f64;
        let r = pos.r as f64;
        let x = (f[0] * q + f[1] * r) * self.size;
        let y = (f[2] * q + f[3] * r) * self.size;
        Vec2::new(x as f32, y as f32)
    }

    /// The cell containing a world position.
    pub fn to_grid_pos(&self, world: Vec2) -> GridPos {
        let (_, b) = ORIENTATION;
        let x = world.x as f64;
        let y = world.y as f64;
        let q = (b[0] * x + b[1] * y) / self.size;
        let r = (b[2] * x + b[3] * y) / self.size;
        cube_round(q, -(q + r), r)
    }
}

/// Round fractional cube coordinates `(x, y, z)` to the containing cell.
///
/// Each axis is rounded independently; the axis with the largest rounding
/// error is then recomputed from the other two so that `x + y + z == 0`.
/// Exact ties prefer correcting `x`, then `y`. The result is `(q = x, r = z)`.
pub fn cube_round(x: f64, y: f64, z: f64) -> GridPos {
    let mut rx = x.round();
    let ry = y.round();
    let mut rz = z.round();

    let x_err = (rx - x).abs();
    let y_err = (ry - y).abs();
    let z_err = (rz - z).abs();

    if x_err >= y_err && x_err >= z_err {
        rx = -ry - rz;
    } else if y_err >= z_err {
        // y absorbs the error; q and r keep their rounding.
    } else {
        rz = -rx - ry;
    }

    GridPos::new(rx as i32, rz as i32)
}

/// Linear interpolation between two cells in cube space, as `[x, y, z]`.
///
/// `t = 0` yields `a` and `t = 1` yields `b` exactly.
pub fn lerp_cube(a: GridPos, b: GridPos, t: f64) -> [f64; 3] {
    let cube = |p: GridPos| {
        let (q, r) = (f64::from(p.q), f64::from(p.r));
        [q, -q - r, r]
    };
    let (a, b) = (cube(a), cube(b));
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}
