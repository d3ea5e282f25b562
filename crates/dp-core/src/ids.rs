//! Strongly typed philosopher identifier.
//!
//! The inner integer is `pub` so tests and loaders can build IDs directly,
//! but callers should prefer `.index()` when indexing per-philosopher `Vec`s.

use std::fmt;

/// Seat number of a philosopher at the table, in `[0, N)`.
///
/// `Copy + Ord + Hash` so it can be used as a map key and sorted without
/// ceremony.  Immutable for the lifetime of the philosopher.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhilosopherId(pub u32);

impl PhilosopherId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PhilosopherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PhilosopherId> for usize {
    #[inline(always)]
    fn from(id: PhilosopherId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for PhilosopherId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<PhilosopherId, Self::Error> {
        u32::try_from(n).map(PhilosopherId)
    }
}
