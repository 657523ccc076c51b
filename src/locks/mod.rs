//! Resource locking subsystem for palaver.
//!
//! A resource (e.g. `"history"`) is held by at most one requester at a time.
//! Requesters who ask while it is held are queued in arrival order, and a
//! release by the holder hands the resource straight to the head of the
//! queue.
//!
//! # States
//!
//! - **Unlocked**: no holder, empty queue
//! - **Held(X)**: `X` holds the resource, zero or more waiters queued
//!
//! `acquire` moves Unlocked to Held. `release` moves Held(X) back to
//! Unlocked, or directly to Held(next) when someone is waiting.
//!
//! # Outcomes vs errors
//!
//! Ordinary misuse (re-acquiring a held lock, releasing someone else's lock)
//! is reported through [`AcquireOutcome`] and [`ReleaseOutcome`]. Only
//! contract violations (a blank resource name, an inconsistent record)
//! surface as [`PalaverError`](crate::error::PalaverError).
//!
//! # Concurrency
//!
//! Each record sits behind its own mutex; the table holds a separate mutex
//! only for the insert-or-fetch step. No operation ever waits for the
//! resource itself, so callers cannot deadlock through the manager.

mod manager;
mod record;
mod table;
mod types;


// Re-export public API
pub use manager::LockManager;
pub use record::LockRecord;
pub use table::LockTable;
pub use types::{AcquireOutcome, Acquisition, LockStatus, Release, ReleaseOutcome};
