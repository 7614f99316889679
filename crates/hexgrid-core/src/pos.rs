//! Axial hex coordinates and the shared direction table.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pointy-top axial offsets in `(dq, dr)` order: E, NE, NW, W, SW, SE.
///
/// Every neighbour enumeration, ring walk and path search in the workspace
/// iterates this table in this order.
pub const DIRECTIONS: [GridPos; 6] = [
    GridPos { q: 1, r: 0 },  // E
    GridPos { q: 1, r: -1 }, // NE
    GridPos { q: 0, r: -1 }, // NW
    GridPos { q: -1, r: 0 }, // W
    GridPos { q: -1, r: 1 }, // SW
    GridPos { q: 0, r: 1 },  // SE
];

/// An axial hex coordinate `(q, r)`.
///
/// The implied third cube axis is `s = -q - r` (see [`GridPos::s`]), so
/// `q + r + s == 0` always holds.
///
/// # Ordering
///
/// `Ord` packs `q` into the high 32 bits and `r` into the low 32 bits of a
/// `u64` and compares the packed values. The order is total and stable but
/// carries no spatial meaning; it exists so `GridPos` can key ordered
/// containers.
///
/// # Examples
///
/// ```
/// use hexgrid_core::GridPos;
///
/// let a = GridPos::new(0, 0);
/// let b = GridPos::new(2, -1);
/// assert_eq!(a.distance(b), 2);
/// assert_eq!(-b, GridPos::new(-2, 1));
/// assert_eq!(b.s(), -1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridPos {
    /// Column axis.
    pub q: i32,
    /// Row axis.
    pub r: i32,
}

impl GridPos {
    /// The centre cell of every grid.
    pub const ORIGIN: GridPos = GridPos { q: 0, r: 0 };

    /// Create a coordinate from its axial components.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The implied third cube coordinate, `-q - r` (wrapping).
    pub const fn s(&self) -> i32 {
        self.q.wrapping_neg().wrapping_sub(self.r)
    }

    /// Opaque packed key backing the `Ord` implementation.
    pub const fn sort_key(&self) -> u64 {
        ((self.q as u32 as u64) << 32) | (self.r as u32 as u64)
    }

    /// The adjacent cell in direction `dir` (index into [`DIRECTIONS`], taken mod 6).
    pub fn neighbor(self, dir: usize) -> GridPos {
        self + DIRECTIONS[dir % 6]
    }

    /// All six adjacent cells in [`DIRECTIONS`] order, regardless of any grid bounds.
    pub fn neighbors(self) -> [GridPos; 6] {
        DIRECTIONS.map(|d| self + d)
    }

    /// Cube distance: `(|dq| + |dr| + |dq + dr|) / 2`.
    ///
    /// This is the length of the shortest 6-connected walk between the two
    /// cells on an unbounded lattice. Computed in `i64`; distances beyond
    /// `u32::MAX` saturate.
    pub fn distance(self, other: GridPos) -> u32 {
        let dq = i64::from(self.q) - i64::from(other.q);
        let dr = i64::from(self.r) - i64::from(other.r);
        let d = (dq.abs() + dr.abs() + (dq + dr).abs()) / 2;
        u32::try_from(d).unwrap_or(u32::MAX)
    }

    /// `true` when `other` is exactly one step away.
    pub fn is_adjacent(self, other: GridPos) -> bool {
        self.distance(other) == 1
    }
}

impl PartialOrd for GridPos {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GridPos {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

impl From<(i32, i32)> for GridPos {
    fn from((q, r): (i32, i32)) -> Self {
        Self { q, r }
    }
}

// Coordinate arithmetic wraps on `i32` overflow. Grids are far smaller than
// the `i32` range, so wrapped results only arise for off-grid inputs.

impl Add for GridPos {
    type Output = GridPos;
    fn add(self, rhs: GridPos) -> GridPos {
        GridPos::new(self.q.wrapping_add(rhs.q), self.r.wrapping_add(rhs.r))
    }
}

impl Sub for GridPos {
    type Output = GridPos;
    fn sub(self, rhs: GridPos) -> GridPos {
        GridPos::new(self.q.wrapping_sub(rhs.q), self.r.wrapping_sub(rhs.r))
    }
}

impl Mul<i32> for GridPos {
    type Output = GridPos;
    fn mul(self, rhs: i32) -> GridPos {
        GridPos::new(self.q.wrapping_mul(rhs), self.r.wrapping_mul(rhs))
    }
}

impl Neg for GridPos {
    type Output = GridPos;
    fn neg(self) -> GridPos {
        GridPos::new(self.q.wrapping_neg(), self.r.wrapping_neg())
    }
}
