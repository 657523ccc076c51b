//! CLI argument parsing for palaver.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Palaver: chat-bot backend with guided conversations, per-user command
/// history, and a queued lock on the shared history.
///
/// Chat messages are read one per line as `<user_id> <message>`, standing in
/// for the chat platform connection.
#[derive(Parser, Debug)]
#[command(name = "palaver")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for palaver.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration file.
    ///
    /// Refuses to overwrite an existing file.
    Init(InitArgs),

    /// Run a chat session.
    ///
    /// Loads saved history and conversation state, then handles one
    /// `<user_id> <message>` line at a time and prints the bot's replies.
    Run(RunArgs),

    /// List the conversation topics the bot supports.
    Topics,
}

/// Arguments for the `init` command.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Where to write the configuration.
    #[arg(short, long, default_value = crate::config::DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

/// Arguments for the `run` command.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Configuration file; defaults are used when it does not exist.
    #[arg(short, long, default_value = crate::config::DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Read messages from this file instead of stdin.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_run_defaults() {
        let cli = Cli::try_parse_from(["palaver", "run"]).unwrap();
        match cli.command {
            Command::Run(args) => {
                assert_eq!(args.config, PathBuf::from("palaver.yaml"));
                assert!(args.input.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parse_run_with_input() {
        let cli = Cli::try_parse_from([
            "palaver", "run", "--config", "bot.yaml", "--input", "chat.txt",
        ])
        .unwrap();
        match cli.command {
            Command::Run(args) => {
                assert_eq!(args.config, PathBuf::from("bot.yaml"));
                assert_eq!(args.input, Some(PathBuf::from("chat.txt")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parse_init_and_topics() {
        assert!(matches!(
            Cli::try_parse_from(["palaver", "init", "-c", "x.yaml"]).unwrap().command,
            Command::Init(_)
        ));
        assert!(matches!(
            Cli::try_parse_from(["palaver", "topics"]).unwrap().command,
            Command::Topics
        ));
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["palaver", "claim"]).is_err());
    }
}
