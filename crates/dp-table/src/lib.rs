//! `dp-table` — the shared fork table and its acquisition protocol.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                    |
//! |-----------------|-------------------------------------------------------------|
//! | [`eligibility`] | `can_eat` predicate, `find_conflict` invariant check         |
//! | [`table`]       | `SharedTable` — status table, wait channels, acquire/release |
//! | [`observer`]    | `TableObserver` hooks, `NoopTableObserver`, `TransitionRecorder` |
//!
//! # Protocol
//!
//! ```text
//! acquire_forks(i):                     release_forks(i):
//!   lock                                  lock
//!   while !can_eat(i):                    status[i] = Thinking
//!       wait(channel[i])  // unlocks      notify_one(channel[left(i)])
//!   status[i] = Eating                    notify_one(channel[right(i)])
//!   unlock                                unlock
//! ```
//!
//! No philosopher ever holds one fork while waiting for the other: taking
//! both forks is a single status flip under the lock, so circular wait is
//! impossible.  Every wake-up re-checks `can_eat`, which makes lost and
//! spurious wake-ups harmless.

pub mod eligibility;
pub mod observer;
pub mod table;


pub use eligibility::{can_eat, find_conflict};
pub use observer::{NoopTableObserver, TableEvent, TableObserver, TransitionRecorder};
pub use table::SharedTable;
