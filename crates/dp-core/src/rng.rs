//! Deterministic per-philosopher RNG.
//!
//! # Determinism strategy
//!
//! Each philosopher gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (philosopher_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive seat numbers uniformly across the seed space.
//! Philosophers never share RNG state, so drawing a delay needs no lock and
//! cannot contend with the fork protocol.

use std::time::Duration;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::{DelayRange, PhilosopherId};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-philosopher deterministic RNG.
///
/// Created once per philosopher when the dinner starts and moved into that
/// philosopher's thread.
pub struct PhilosopherRng(SmallRng);

impl PhilosopherRng {
    /// Seed deterministically from the run's global seed and a seat number.
    pub fn new(global_seed: u64, id: PhilosopherId) -> Self {
        let seed = global_seed ^ (id.0 as u64).wrapping_mul(MIXING_CONSTANT);
        PhilosopherRng(SmallRng::seed_from_u64(seed))
    }

    /// Draw a fresh global seed from the thread-local entropy source.
    pub fn fresh_seed() -> u64 {
        rand::random()
    }

    /// Sample a think or eat delay.
    #[inline]
    pub fn delay(&mut self, range: DelayRange) -> Duration {
        range.sample(&mut self.0)
    }
}
