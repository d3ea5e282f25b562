//! `dp-core` — foundational types for the `rust_dp` dining simulation.
//!
//! This crate is a dependency of every other `dp-*` crate.  It has no `dp-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `PhilosopherId`                                       |
//! | [`ring`]        | `Ring` — the fixed left/right neighbor relation       |
//! | [`status`]      | `PhilosopherStatus` (`Thinking` / `Eating`)           |
//! | [`config`]      | `TableConfig`, `DelayRange`, default constants        |
//! | [`rng`]         | `PhilosopherRng` (per-philosopher, seeded)            |
//! | [`error`]       | `DpError`, `DpResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod ring;
pub mod rng;
pub mod status;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    DEFAULT_MAX_DELAY_MS, DEFAULT_MIN_DELAY_MS, DEFAULT_PHILOSOPHERS, DelayRange, TableConfig,
};
pub use error::{DpError, DpResult};
pub use ids::PhilosopherId;
pub use ring::Ring;
pub use rng::PhilosopherRng;
pub use status::PhilosopherStatus;
