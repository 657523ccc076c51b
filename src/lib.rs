//! Palaver: chat-bot backend with a decision-tree dialogue, per-user command
//! history, and a FIFO-queued lock guarding the shared history.
//!
//! The [`locks`] module is the core: a non-blocking lock manager where a
//! requester either gets the resource, is told it already holds it, or is
//! queued, and where a release hands the resource to the longest waiter.

pub mod bot;
pub mod cli;
pub mod commands;
pub mod config;
pub mod conversation;
pub mod error;
pub mod exit_codes;
pub mod history;
pub mod locks;
pub mod persistence;
pub mod structures;
pub mod user;

#[cfg(test)]
mod test_support;
