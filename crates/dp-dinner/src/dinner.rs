//! The lifecycle controller: start, request shutdown, await all.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};

use dp_core::{PhilosopherId, PhilosopherRng, Ring};
use dp_table::{SharedTable, TableObserver};
use tracing::{info, warn};

use crate::philosopher::{self, Shared};
use crate::{DinnerError, DinnerObserver, DinnerResult, Pacer};

// ── ShutdownFlag ──────────────────────────────────────────────────────────────

/// Cooperative cancellation signal, read by every philosopher once per cycle.
///
/// The flag goes from `false` to `true` exactly once.  It is read without
/// the table lock; release/acquire ordering makes the write visible to every
/// philosopher at its next check.
#[derive(Debug, Default)]
pub struct ShutdownFlag(AtomicBool);

impl ShutdownFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flag.  Returns `true` only for the call that flipped it.
    pub fn request(&self) -> bool {
        !self.0.swap(true, Ordering::AcqRel)
    }

    #[inline]
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

// ── Dinner ────────────────────────────────────────────────────────────────────

/// A validated, ready-to-start dinner.
///
/// Create via [`DinnerBuilder`][crate::DinnerBuilder].  Everyone starts
/// thinking; nothing runs until [`start`](Self::start).
pub struct Dinner<P, O, T>
where
    P: Pacer,
    O: DinnerObserver,
    T: TableObserver + 'static,
{
    pub(crate) seed:   u64,
    pub(crate) shared: Arc<Shared<P, O, T>>,
}

impl<P, O, T> Dinner<P, O, T>
where
    P: Pacer,
    O: DinnerObserver,
    T: TableObserver + 'static,
{
    pub fn ring(&self) -> Ring {
        self.shared.table.ring()
    }

    /// Master seed for the per-philosopher RNGs (drawn fresh if none was
    /// configured).
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn table(&self) -> &SharedTable<T> {
        &self.shared.table
    }

    /// Launch one named OS thread per philosopher.
    ///
    /// If a thread cannot be spawned, the philosophers already seated are
    /// shut down and joined before the error is returned.
    pub fn start(self) -> DinnerResult<RunningDinner<P, O, T>> {
        let ring = self.ring();
        let mut handles = Vec::with_capacity(ring.count());

        for id in ring.ids() {
            let shared = Arc::clone(&self.shared);
            let rng = PhilosopherRng::new(self.seed, id);
            let spawned = thread::Builder::new()
                .name(format!("philosopher-{id}"))
                .spawn(move || philosopher::dine(id, &shared, rng));

            match spawned {
                Ok(handle) => handles.push((id, handle)),
                Err(source) => {
                    warn!(%id, error = %source, "failed to seat philosopher; shutting down");
                    self.shared.shutdown.request();
                    for (_, handle) in handles {
                        let _ = handle.join();
                    }
                    return Err(DinnerError::Spawn { id, source });
                }
            }
        }

        info!(philosophers = ring.count(), seed = self.seed, "dinner started");
        Ok(RunningDinner { seed: self.seed, shared: self.shared, handles })
    }
}

// ── RunningDinner ─────────────────────────────────────────────────────────────

/// Handle to a dinner whose philosopher threads are running.
///
/// Dropping the handle without calling [`await_all`](Self::await_all)
/// requests shutdown; the threads then finish their current cycle detached.
pub struct RunningDinner<P, O, T>
where
    P: Pacer,
    O: DinnerObserver,
    T: TableObserver + 'static,
{
    seed:    u64,
    shared:  Arc<Shared<P, O, T>>,
    handles: Vec<(PhilosopherId, JoinHandle<u64>)>,
}

impl<P, O, T> RunningDinner<P, O, T>
where
    P: Pacer,
    O: DinnerObserver,
    T: TableObserver + 'static,
{
    /// Ask every philosopher to leave after its current cycle.
    ///
    /// Does not interrupt a philosopher that is waiting for forks or eating.
    /// Calling it more than once has no further effect.
    pub fn request_shutdown(&self) {
        if self.shared.shutdown.request() {
            info!("shutdown requested; philosophers finish their current cycle");
        }
    }

    pub fn is_shutdown_requested(&self) -> bool {
        self.shared.shutdown.is_set()
    }

    pub fn table(&self) -> &SharedTable<T> {
        &self.shared.table
    }

    /// Block until every philosopher thread has exited.
    ///
    /// Call [`request_shutdown`](Self::request_shutdown) first; otherwise
    /// the philosophers dine forever and this never returns.
    ///
    /// Every thread is joined even if some panicked; the error names the
    /// lowest panicked seat.
    pub fn await_all(mut self) -> DinnerResult<DinnerReport> {
        let handles = std::mem::take(&mut self.handles);
        let mut meals = Vec::with_capacity(handles.len());
        let mut panicked = None;
        for (id, handle) in handles {
            match handle.join() {
                Ok(eaten) => meals.push(eaten),
                Err(_) => {
                    warn!(%id, "philosopher thread panicked");
                    panicked.get_or_insert(id);
                }
            }
        }
        match panicked {
            Some(id) => Err(DinnerError::PhilosopherPanicked(id)),
            None => Ok(DinnerReport { seed: self.seed, meals }),
        }
    }
}

impl<P, O, T> Drop for RunningDinner<P, O, T>
where
    P: Pacer,
    O: DinnerObserver,
    T: TableObserver + 'static,
{
    fn drop(&mut self) {
        if !self.handles.is_empty() {
            self.request_shutdown();
        }
    }
}

// ── DinnerReport ──────────────────────────────────────────────────────────────

/// What happened at a finished dinner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DinnerReport {
    /// Master seed the philosophers' RNGs were derived from.
    pub seed:  u64,
    /// Meals eaten, indexed by `PhilosopherId`.
    pub meals: Vec<u64>,
}

impl DinnerReport {
    pub fn total_meals(&self) -> u64 {
        self.meals.iter().sum()
    }
}
