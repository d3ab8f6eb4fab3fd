//! Strongly-typed region identifiers.

use std::fmt;

/// Identifies an allocated region within an [`Arena`](crate::Arena).
///
/// Regions are assigned sequential IDs in allocation order: `RegionId(n)`
/// is the n-th successful allocation since the last reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub u32);

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RegionId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
