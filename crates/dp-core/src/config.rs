//! Table configuration and think/eat delay bounds.
//!
//! The three recognised options are `philosopher_count`, `min_delay_ms` and
//! `max_delay_ms`.  An optional `seed` makes delay sequences reproducible.

use std::time::Duration;

use rand::Rng;

use crate::{DpError, DpResult, Ring};

/// Seats at the table when nothing else is configured.
pub const DEFAULT_PHILOSOPHERS: usize = 5;

/// Lower bound of a think or eat delay, in milliseconds.
pub const DEFAULT_MIN_DELAY_MS: u64 = 5_000;

/// Upper bound (exclusive) of a think or eat delay, in milliseconds.
pub const DEFAULT_MAX_DELAY_MS: u64 = 15_000;

// ── DelayRange ────────────────────────────────────────────────────────────────

/// Bounds for one randomized think or eat delay.
///
/// Samples are drawn uniformly from the half-open interval
/// `[min_ms, max_ms)`.  A degenerate range (`min_ms == max_ms`) always
/// yields `min_ms`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct DelayRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl DelayRange {
    pub fn new(min_ms: u64, max_ms: u64) -> DpResult<Self> {
        if min_ms > max_ms {
            return Err(DpError::InvalidDelay { min_ms, max_ms });
        }
        Ok(Self { min_ms, max_ms })
    }

    /// Draw one delay from `rng`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Duration {
        let ms = if self.min_ms >= self.max_ms {
            self.min_ms
        } else {
            rng.gen_range(self.min_ms..self.max_ms)
        };
        Duration::from_millis(ms)
    }
}

// ── TableConfig ───────────────────────────────────────────────────────────────

/// Top-level configuration for one dinner.
///
/// Typically loaded from a TOML file by the application crate (with the
/// `serde` feature) and then overridden from the command line.  Missing keys
/// fall back to [`TableConfig::default`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TableConfig {
    /// Number of philosophers (and forks).  At least 2.
    pub philosopher_count: usize,

    /// Shortest think or eat delay, in milliseconds.
    pub min_delay_ms: u64,

    /// Longest think or eat delay (exclusive), in milliseconds.
    pub max_delay_ms: u64,

    /// Master RNG seed.  `None` draws a fresh seed for every run.
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            philosopher_count: DEFAULT_PHILOSOPHERS,
            min_delay_ms:      DEFAULT_MIN_DELAY_MS,
            max_delay_ms:      DEFAULT_MAX_DELAY_MS,
            seed:              None,
        }
    }
}

impl TableConfig {
    /// Reject tables that cannot share forks and inverted delay bounds.
    pub fn validate(&self) -> DpResult<()> {
        self.ring()?;
        self.delay_range()?;
        Ok(())
    }

    /// The seating ring described by `philosopher_count`.
    pub fn ring(&self) -> DpResult<Ring> {
        Ring::new(self.philosopher_count)
    }

    /// The think/eat delay bounds.
    pub fn delay_range(&self) -> DpResult<DelayRange> {
        DelayRange::new(self.min_delay_ms, self.max_delay_ms)
    }
}
