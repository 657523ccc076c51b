//! Parsing of prefixed chat commands.

/// A recognised chat command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    /// Show the sender's command history.
    History,
    /// Empty the sender's command history.
    ClearHistory,
    /// Count of commands the sender has used.
    Stats,
    /// Write the sender's history to a text file.
    Export,
    /// Start the guided conversation.
    HelpMe,
    /// Restart the guided conversation.
    Reset,
    /// Ask whether a topic is supported; no topic lists them.
    Speak(Option<String>),
    /// Persist history and conversation state.
    Save,
    /// Request the history lock.
    LockHistory,
    /// Give up the history lock.
    UnlockHistory,
    /// Show who holds the history lock and who is waiting.
    LockStatus,
    /// Anything else; carries the name as typed.
    Unknown(String),
}

/// Command names in the order they are listed to users.
pub const COMMAND_NAMES: &[&str] = &[
    "helpme",
    "reset",
    "speak",
    "history",
    "clearhistory",
    "stats",
    "export",
    "save",
    "lockhistory",
    "unlockhistory",
    "lockstatus",
];

impl BotCommand {
    /// Parse the text following the prefix, e.g. `"speak python"`.
    ///
    /// Command names are case-insensitive; arguments are kept as typed.
    pub fn parse(body: &str) -> Self {
        let body = body.trim();
        let (name, args) = match body.split_once(char::is_whitespace) {
            Some((name, args)) => (name, args.trim()),
            None => (body, ""),
        };

        match name.to_lowercase().as_str() {
            "history" => BotCommand::History,
            "clearhistory" => BotCommand::ClearHistory,
            "stats" => BotCommand::Stats,
            "export" => BotCommand::Export,
            "helpme" => BotCommand::HelpMe,
            "reset" => BotCommand::Reset,
            "speak" => BotCommand::Speak(Some(args.to_string()).filter(|a| !a.is_empty())),
            "save" => BotCommand::Save,
            "lockhistory" => BotCommand::LockHistory,
            "unlockhistory" => BotCommand::UnlockHistory,
            "lockstatus" => BotCommand::LockStatus,
            _ => BotCommand::Unknown(name.to_string()),
        }
    }

    /// Whether the command reads or changes history and must respect the lock.
    pub fn is_gated(&self) -> bool {
        matches!(
            self,
            BotCommand::History | BotCommand::ClearHistory | BotCommand::Stats | BotCommand::Export
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(BotCommand::parse("history"), BotCommand::History);
        assert_eq!(BotCommand::parse("LockHistory"), BotCommand::LockHistory);
        assert_eq!(BotCommand::parse("  unlockhistory  "), BotCommand::UnlockHistory);
    }

    #[test]
    fn test_parse_speak_arguments() {
        assert_eq!(BotCommand::parse("speak"), BotCommand::Speak(None));
        assert_eq!(BotCommand::parse("speak   "), BotCommand::Speak(None));
        assert_eq!(
            BotCommand::parse("speak Web Design"),
            BotCommand::Speak(Some("Web Design".to_string()))
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(BotCommand::parse("dance now"), BotCommand::Unknown("dance".to_string()));
        assert_eq!(BotCommand::parse(""), BotCommand::Unknown(String::new()));
    }

    #[test]
    fn test_every_listed_name_parses() {
        for name in COMMAND_NAMES {
            assert!(
                !matches!(BotCommand::parse(name), BotCommand::Unknown(_)),
                "{} should be known",
                name
            );
        }
    }

    #[test]
    fn test_gated_commands() {
        assert!(BotCommand::History.is_gated());
        assert!(BotCommand::Export.is_gated());
        assert!(!BotCommand::LockHistory.is_gated());
        assert!(!BotCommand::Speak(None).is_gated());
    }
}
