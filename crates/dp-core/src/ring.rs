//! The circular seating arrangement.
//!
//! Philosopher `i` shares one fork with `left(i)` and one with `right(i)`:
//!
//!   left(i)  = (i + N - 1) mod N
//!   right(i) = (i + 1) mod N
//!
//! The relation is derived from `N` alone and never stored per philosopher.

use crate::{DpError, DpResult, PhilosopherId};

/// A table of `count` seats arranged in a ring.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Ring {
    count: usize,
}

impl Ring {
    /// Build a ring of `count` seats.  Fewer than two seats cannot share forks.
    pub fn new(count: usize) -> DpResult<Self> {
        if count < 2 {
            return Err(DpError::TooFewPhilosophers(count));
        }
        Ok(Self { count })
    }

    /// Number of seats (and forks).
    #[inline]
    pub fn count(self) -> usize {
        self.count
    }

    #[inline]
    pub fn left(self, id: PhilosopherId) -> PhilosopherId {
        PhilosopherId(((id.index() + self.count - 1) % self.count) as u32)
    }

    #[inline]
    pub fn right(self, id: PhilosopherId) -> PhilosopherId {
        PhilosopherId(((id.index() + 1) % self.count) as u32)
    }

    /// Both neighbors as `(left, right)`.  For a two-seat ring they coincide.
    #[inline]
    pub fn neighbors(self, id: PhilosopherId) -> (PhilosopherId, PhilosopherId) {
        (self.left(id), self.right(id))
    }

    /// Check that `id` names a seat at this table.
    pub fn check(self, id: PhilosopherId) -> DpResult<PhilosopherId> {
        if id.index() < self.count {
            Ok(id)
        } else {
            Err(DpError::OutOfRange { index: id.index(), count: self.count })
        }
    }

    /// All seats in ascending order.
    pub fn ids(self) -> impl Iterator<Item = PhilosopherId> {
        (0..self.count as u32).map(PhilosopherId)
    }
}
