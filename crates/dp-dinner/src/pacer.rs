//! The `Pacer` trait — how long a philosopher thinks or eats.

use std::thread;

use dp_core::{DelayRange, PhilosopherId, PhilosopherRng, PhilosopherStatus};

/// Pluggable think/eat duration.
///
/// Called outside the table lock, once per activity per cycle, with the
/// philosopher's own [`PhilosopherRng`] so delay sequences are reproducible
/// for a fixed seed regardless of thread interleaving.
///
/// Implementations are shared by every philosopher thread, so they must be
/// `Send + Sync`.  Per-philosopher state belongs in the RNG, not the pacer.
pub trait Pacer: Send + Sync + 'static {
    /// Spend the time `id` devotes to `activity`.
    fn pause(&self, id: PhilosopherId, activity: PhilosopherStatus, rng: &mut PhilosopherRng);
}

/// Sleeps for a uniformly random duration drawn from a [`DelayRange`].
///
/// The same range is used for thinking and eating.
#[derive(Copy, Clone, Debug)]
pub struct RandomPacer {
    range: DelayRange,
}

impl RandomPacer {
    pub fn new(range: DelayRange) -> Self {
        Self { range }
    }
}

impl Pacer for RandomPacer {
    fn pause(&self, _id: PhilosopherId, _activity: PhilosopherStatus, rng: &mut PhilosopherRng) {
        thread::sleep(rng.delay(self.range));
    }
}

/// Never sleeps; only yields the thread so other philosophers get a turn.
///
/// Useful in tests and for stress runs where contention matters more than
/// realism.
pub struct InstantPacer;

impl Pacer for InstantPacer {
    fn pause(&self, _id: PhilosopherId, _activity: PhilosopherStatus, _rng: &mut PhilosopherRng) {
        thread::yield_now();
    }
}
