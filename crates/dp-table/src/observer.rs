//! Instrumentation hooks for the fork protocol.

use std::sync::{Arc, Mutex, PoisonError};

use dp_core::{PhilosopherId, PhilosopherStatus};

/// Callbacks invoked by [`SharedTable`][crate::SharedTable] while it holds
/// the table lock.
///
/// Because every call happens inside the critical section, the sequence of
/// calls seen by an observer is a total order consistent with the real
/// status history.  Implementations must be quick and must never call back
/// into the table.
///
/// All methods have default no-op implementations.
pub trait TableObserver: Send + Sync {
    /// A philosopher's status was just written.  `snapshot` is the whole
    /// table immediately after the write.
    fn on_transition(
        &self,
        _id:       PhilosopherId,
        _status:   PhilosopherStatus,
        _snapshot: &[PhilosopherStatus],
    ) {}

    /// `releaser` just signalled `woken`'s wait channel.
    fn on_wake(&self, _releaser: PhilosopherId, _woken: PhilosopherId) {}

    /// `id` evaluated its eligibility inside `acquire_forks`: once on entry
    /// and once more every time its own wait channel wakes it.
    fn on_recheck(&self, _id: PhilosopherId, _eligible: bool) {}
}

/// A [`TableObserver`] that does nothing.
pub struct NoopTableObserver;

impl TableObserver for NoopTableObserver {}

/// Lets a caller keep a handle to an observer it gave away to a table.
impl<T: TableObserver + ?Sized> TableObserver for Arc<T> {
    fn on_transition(
        &self,
        id:       PhilosopherId,
        status:   PhilosopherStatus,
        snapshot: &[PhilosopherStatus],
    ) {
        (**self).on_transition(id, status, snapshot);
    }

    fn on_wake(&self, releaser: PhilosopherId, woken: PhilosopherId) {
        (**self).on_wake(releaser, woken);
    }

    fn on_recheck(&self, id: PhilosopherId, eligible: bool) {
        (**self).on_recheck(id, eligible);
    }
}

// ── TransitionRecorder ────────────────────────────────────────────────────────

/// One observed protocol event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableEvent {
    Transition {
        id:       PhilosopherId,
        status:   PhilosopherStatus,
        snapshot: Vec<PhilosopherStatus>,
    },
    Wake {
        releaser: PhilosopherId,
        woken:    PhilosopherId,
    },
    Recheck {
        id:       PhilosopherId,
        eligible: bool,
    },
}

/// A [`TableObserver`] that keeps every event in order, for auditing a run
/// after it finishes.
#[derive(Default)]
pub struct TransitionRecorder {
    events: Mutex<Vec<TableEvent>>,
}

impl TransitionRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all events recorded so far.
    pub fn events(&self) -> Vec<TableEvent> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn push(&self, event: TableEvent) {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).push(event);
    }
}

impl TableObserver for TransitionRecorder {
    fn on_transition(
        &self,
        id:       PhilosopherId,
        status:   PhilosopherStatus,
        snapshot: &[PhilosopherStatus],
    ) {
        self.push(TableEvent::Transition { id, status, snapshot: snapshot.to_vec() });
    }

    fn on_wake(&self, releaser: PhilosopherId, woken: PhilosopherId) {
        self.push(TableEvent::Wake { releaser, woken });
    }

    fn on_recheck(&self, id: PhilosopherId, eligible: bool) {
        self.push(TableEvent::Recheck { id, eligible });
    }
}
