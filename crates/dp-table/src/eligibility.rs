//! Pure checks over a status snapshot.
//!
//! Both functions read shared state with no synchronisation of their own.
//! [`SharedTable`][crate::SharedTable] only calls them while holding its lock.

use dp_core::{PhilosopherId, PhilosopherStatus, Ring};

/// `true` iff neither neighbor of `id` is eating.
pub fn can_eat(statuses: &[PhilosopherStatus], ring: Ring, id: PhilosopherId) -> bool {
    let (left, right) = ring.neighbors(id);
    !statuses[left.index()].is_eating() && !statuses[right.index()].is_eating()
}

/// The first pair of neighbors that are both eating, if any.
///
/// Checking every `(i, right(i))` pair covers each shared fork exactly once.
pub fn find_conflict(
    statuses: &[PhilosopherStatus],
    ring:     Ring,
) -> Option<(PhilosopherId, PhilosopherId)> {
    ring.ids().find_map(|id| {
        let right = ring.right(id);
        (statuses[id.index()].is_eating() && statuses[right.index()].is_eating())
            .then_some((id, right))
    })
}
