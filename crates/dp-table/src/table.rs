//! The shared status table and the acquire/release protocol.

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

use dp_core::{PhilosopherId, PhilosopherStatus, Ring};

use crate::{NoopTableObserver, TableObserver, can_eat, find_conflict};

/// Status of every philosopher plus one wait channel each, all guarded by a
/// single lock.
///
/// Share it between philosopher threads behind an `Arc`.  Each philosopher
/// writes only its own entry but reads both neighbors', and every read or
/// write happens with the lock held.  The wait channels are `Condvar`s tied
/// to that same lock, so blocking on one releases the lock atomically and
/// reacquires it on wake.
///
/// # Poisoning
///
/// A status write is a single assignment, so the table is consistent even if
/// a thread panicked while holding the lock.  Poisoned guards are therefore
/// recovered rather than propagated.
pub struct SharedTable<T: TableObserver = NoopTableObserver> {
    ring:          Ring,
    statuses:      Mutex<Vec<PhilosopherStatus>>,
    wait_channels: Vec<Condvar>,
    observer:      T,
}

impl SharedTable<NoopTableObserver> {
    /// A table for `ring` with everyone thinking.
    pub fn new(ring: Ring) -> Self {
        Self::with_observer(ring, NoopTableObserver)
    }
}

impl<T: TableObserver> SharedTable<T> {
    /// A table for `ring` with everyone thinking, reporting to `observer`.
    pub fn with_observer(ring: Ring, observer: T) -> Self {
        let count = ring.count();
        Self {
            ring,
            statuses:      Mutex::new(vec![PhilosopherStatus::Thinking; count]),
            wait_channels: (0..count).map(|_| Condvar::new()).collect(),
            observer,
        }
    }

    #[inline]
    pub fn ring(&self) -> Ring {
        self.ring
    }

    // ── Protocol ──────────────────────────────────────────────────────────

    /// Block until both of `id`'s neighbors are not eating, then mark `id`
    /// as eating.
    ///
    /// On return `id` holds both adjacent forks: neither neighbor can start
    /// eating until [`release_forks`](Self::release_forks) is called.  Never
    /// fails and never times out.
    pub fn acquire_forks(&self, id: PhilosopherId) {
        let ring = self.ring;
        let seat = self.seat(id);
        let guard = self.lock();
        debug_assert!(!guard[seat].is_eating(), "philosopher {id} is already eating");

        let mut statuses = self.wait_channels[seat]
            .wait_while(guard, |statuses| {
                let eligible = can_eat(statuses, ring, id);
                self.observer.on_recheck(id, eligible);
                !eligible
            })
            .unwrap_or_else(PoisonError::into_inner);

        statuses[seat] = PhilosopherStatus::Eating;
        debug_assert!(
            find_conflict(&statuses, ring).is_none(),
            "neighbors eating together after philosopher {id} acquired: {:?}",
            find_conflict(&statuses, ring),
        );
        self.observer.on_transition(id, PhilosopherStatus::Eating, &statuses);
    }

    /// Mark `id` as thinking and wake its two neighbors' wait channels.
    ///
    /// Each neighbor gets a single `notify_one`, never a broadcast.  A woken
    /// neighbor re-checks its own eligibility, so waking one whose other
    /// neighbor is still eating (or one that is not waiting) is harmless.
    pub fn release_forks(&self, id: PhilosopherId) {
        let seat = self.seat(id);
        let mut statuses = self.lock();
        statuses[seat] = PhilosopherStatus::Thinking;
        self.observer.on_transition(id, PhilosopherStatus::Thinking, &statuses);

        let (left, right) = self.ring.neighbors(id);
        for neighbor in [left, right] {
            self.wait_channels[neighbor.index()].notify_one();
            self.observer.on_wake(id, neighbor);
        }
    }

    // ── Inspection ────────────────────────────────────────────────────────

    pub fn status(&self, id: PhilosopherId) -> PhilosopherStatus {
        let seat = self.seat(id);
        self.lock()[seat]
    }

    /// Copy of every status, taken atomically under the lock.
    pub fn snapshot(&self) -> Vec<PhilosopherStatus> {
        self.lock().clone()
    }

    pub fn eating_count(&self) -> usize {
        self.lock().iter().filter(|s| s.is_eating()).count()
    }

    /// Index of `id`'s entry.  A philosopher from another table is a
    /// programming error, caught in debug builds before any indexing.
    #[inline]
    fn seat(&self, id: PhilosopherId) -> usize {
        debug_assert!(
            self.ring.check(id).is_ok(),
            "philosopher {id} is not seated at a table of {}",
            self.ring.count(),
        );
        id.index()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<PhilosopherStatus>> {
        self.statuses.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
