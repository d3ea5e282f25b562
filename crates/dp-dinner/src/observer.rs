//! Dinner observer trait for console output and progress reporting.

use dp_core::{PhilosopherId, PhilosopherStatus};

/// Callbacks invoked from philosopher threads at each activity change.
///
/// Unlike [`dp_table::TableObserver`], these run outside the table lock and
/// carry no ordering guarantee across philosophers.  They are purely
/// observational.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait DinnerObserver: Send + Sync + 'static {
    /// `id` starts thinking (top of a cycle).
    fn on_thinking(&self, _id: PhilosopherId) {}

    /// `id` holds both forks and starts eating.
    fn on_eating(&self, _id: PhilosopherId) {}

    /// `id` saw the shutdown flag and is leaving after `meals` meals.
    fn on_leave(&self, _id: PhilosopherId, _meals: u64) {}
}

/// A [`DinnerObserver`] that does nothing.
pub struct NoopObserver;

impl DinnerObserver for NoopObserver {}

/// Prints one line to stdout per activity change.
pub struct ConsoleObserver;

impl ConsoleObserver {
    /// The line printed when `id` switches to `status`.
    pub fn line(id: PhilosopherId, status: PhilosopherStatus) -> String {
        match status {
            PhilosopherStatus::Thinking => format!("Philosopher {id} thinking..."),
            PhilosopherStatus::Eating   => format!("Philosopher {id} eating!"),
        }
    }
}

impl DinnerObserver for ConsoleObserver {
    fn on_thinking(&self, id: PhilosopherId) {
        println!("{}", Self::line(id, PhilosopherStatus::Thinking));
    }

    fn on_eating(&self, id: PhilosopherId) {
        println!("{}", Self::line(id, PhilosopherStatus::Eating));
    }
}
