//! Entity identifiers.
//!
//! The grid never owns entity lifecycle. It stores whatever identifier the
//! caller's entity registry hands out, constrained only by [`EntityKey`].

use std::fmt;
use std::hash::Hash;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bound on the opaque entity identifier stored in grid cells.
///
/// Blanket-implemented for every type that is cheap to copy, hashable and
/// printable, so registry handles (ECS entity ids, integer keys, newtypes)
/// work without glue code.
pub trait EntityKey: Copy + Eq + Hash + fmt::Debug + 'static {}

impl<T> EntityKey for T where T: Copy + Eq + Hash + fmt::Debug + 'static {}

/// A plain numeric entity identifier.
///
/// For callers without a registry type of their own, and for tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EntityId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
