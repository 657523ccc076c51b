//! Command implementations for palaver.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod init;
mod run;

use crate::cli::Command;
use crate::conversation::DialogueTree;
use crate::error::Result;

pub use run::{SessionSummary, parse_line, run_session};

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Init(args) => init::cmd_init(args),
        Command::Run(args) => run::cmd_run(args),
        Command::Topics => cmd_topics(),
    }
}

fn cmd_topics() -> Result<()> {
    let tree = DialogueTree::build();
    println!("Supported topics:");
    for topic in tree.topics() {
        println!("  {}", topic);
    }
    Ok(())
}
