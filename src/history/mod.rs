//! Per-user command history.
//!
//! Every user owns an append-only list of the raw commands they sent. The
//! list can be cleared (keeping the entry) or the entry deleted entirely.
//! Snapshots map the decimal user id to the command list.

mod ledger;

#[cfg(test)]
mod tests;

pub use ledger::{HistoryLog, HistorySnapshot};
