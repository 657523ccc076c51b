//! Chat command handling.
//!
//! [`Bot`] receives `(user, message)` pairs from whatever transport carries
//! the chat and turns them into replies. Messages starting with the command
//! prefix are commands; anything else continues the user's conversation if
//! one is running.
//!
//! # The history lock
//!
//! History commands (`history`, `clearhistory`, `stats`, `export`) are gated
//! by a lock resource: while another user holds it they only get a notice.
//! Commands are recorded in the sender's history only when the lock is free
//! or held by the sender.

mod command;
mod handler;


pub use command::BotCommand;
pub use handler::{Bot, Reply};
