//! Persistence for palaver.
//!
//! History and conversation snapshots are stored as pretty-printed JSON.
//! Every write goes through [`atomic_write`] so a crash never leaves a
//! half-written snapshot behind. Lock state is deliberately absent: it lives
//! only as long as the process.

pub mod atomic;
mod json;

pub use atomic::{atomic_write, atomic_write_file};
pub use json::{load_json, save_json};
