//! `dp-dinner` — philosopher threads and lifecycle control.
//!
//! # Philosopher loop
//!
//! ```text
//! while !shutdown:
//!   ① Think    — observer.on_thinking; pacer.pause(Thinking)
//!   ② Acquire  — table.acquire_forks   (the only blocking point)
//!   ③ Eat      — observer.on_eating;   pacer.pause(Eating)
//!   ④ Release  — table.release_forks   (wakes both neighbors)
//! ```
//!
//! The shutdown flag is read once per cycle, at the top.  A philosopher that
//! is blocked waiting for forks or in the middle of a meal finishes its
//! cycle before it leaves, so shutdown latency is bounded by one cycle.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use dp_core::TableConfig;
//! use dp_dinner::{ConsoleObserver, DinnerBuilder};
//!
//! let running = DinnerBuilder::new(TableConfig::default())
//!     .observer(ConsoleObserver)
//!     .build()?
//!     .start()?;
//! // … wait for a stop trigger …
//! running.request_shutdown();
//! let report = running.await_all()?;
//! ```

pub mod builder;
pub mod dinner;
pub mod error;
pub mod observer;
pub mod pacer;
mod philosopher;

#[cfg(test)]
mod tests;

pub use builder::DinnerBuilder;
pub use dinner::{Dinner, DinnerReport, RunningDinner, ShutdownFlag};
pub use error::{DinnerError, DinnerResult};
pub use observer::{ConsoleObserver, DinnerObserver, NoopObserver};
pub use pacer::{InstantPacer, Pacer, RandomPacer};
