//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `DpError` as one variant
//! via `#[from]`.

use thiserror::Error;

/// The top-level error type for `dp-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum DpError {
    #[error("a table needs at least 2 philosophers, got {0}")]
    TooFewPhilosophers(usize),

    #[error("minimum delay {min_ms} ms exceeds maximum delay {max_ms} ms")]
    InvalidDelay { min_ms: u64, max_ms: u64 },

    #[error("philosopher index {index} is outside a table of {count}")]
    OutOfRange { index: usize, count: usize },
}

/// Shorthand result type for all `dp-*` crates.
pub type DpResult<T> = Result<T, DpError>;
