//! The bot: routes messages to history, conversation, and lock operations.

use super::command::{BotCommand, COMMAND_NAMES};
use crate::config::Config;
use crate::conversation::{ConversationEngine, ConversationSnapshot};
use crate::error::Result;
use crate::history::{HistoryLog, HistorySnapshot};
use crate::locks::{AcquireOutcome, LockManager, LockStatus, ReleaseOutcome};
use crate::persistence::{atomic_write_file, load_json, save_json};
use crate::user::UserId;
use chrono::{SecondsFormat, Utc};
use std::path::PathBuf;

/// Something the bot sends back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    /// A file written for the user (the export).
    File(PathBuf),
}

impl Reply {
    fn text(s: impl Into<String>) -> Self {
        Reply::Text(s.into())
    }
}

/// Chat-bot state: configuration plus the three collaborating components.
#[derive(Debug)]
pub struct Bot {
    config: Config,
    history: HistoryLog,
    conversation: ConversationEngine,
    locks: LockManager<UserId>,
}

impl Bot {
    /// A bot with empty history and conversation state.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            history: HistoryLog::new(),
            conversation: ConversationEngine::new(),
            locks: LockManager::new(),
        }
    }

    /// A bot restored from the snapshots named in `config`.
    ///
    /// A snapshot that cannot be read is logged and that component starts
    /// empty; startup never fails because of saved data.
    pub fn load(config: Config) -> Self {
        let mut bot = Self::new(config);

        match load_json::<HistorySnapshot, _>(bot.config.history_path()) {
            Ok(snapshot) => bot.history.load_snapshot(snapshot),
            Err(e) => log::warn!("history not loaded: {}", e),
        }
        match load_json::<ConversationSnapshot, _>(bot.config.conversation_path()) {
            Ok(snapshot) => bot.conversation.load_snapshot(snapshot),
            Err(e) => log::warn!("conversation state not loaded: {}", e),
        }

        log::info!(
            "loaded {} history entries and {} conversations",
            bot.history.users().len(),
            bot.conversation.len()
        );
        bot
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn conversation(&self) -> &ConversationEngine {
        &self.conversation
    }

    pub fn locks(&self) -> &LockManager<UserId> {
        &self.locks
    }

    /// Write both snapshots.
    pub fn save(&self) -> Result<()> {
        save_json(self.config.history_path(), &self.history.to_snapshot())?;
        save_json(self.config.conversation_path(), &self.conversation.to_snapshot())
    }

    /// Handle one incoming message and return the replies to send, in order.
    pub fn handle_message(&mut self, user: UserId, content: &str) -> Result<Vec<Reply>> {
        let content = content.trim();

        let Some(body) = content.strip_prefix(self.config.command_prefix.as_str()) else {
            if self.conversation.is_active(user) {
                return Ok(vec![Reply::Text(self.conversation.handle_message(user, content))]);
            }
            return Ok(Vec::new());
        };

        if self.may_touch_history(user)? {
            self.history.add_command(user, content);
        }

        let command = BotCommand::parse(body);
        log::debug!("user {} -> {:?}", user, command);
        self.dispatch(user, command)
    }

    fn dispatch(&mut self, user: UserId, command: BotCommand) -> Result<Vec<Reply>> {
        if command.is_gated() && !self.may_touch_history(user)? {
            return Ok(vec![Reply::Text(self.locked_notice())]);
        }

        let reply = match command {
            BotCommand::History => self.show_history(user),
            BotCommand::ClearHistory => {
                self.history.clear(user);
                Reply::text("History cleared.")
            }
            BotCommand::Stats => self.stats(user),
            BotCommand::Export => self.export(user),
            BotCommand::HelpMe => Reply::Text(self.conversation.start(user)),
            BotCommand::Reset => Reply::Text(self.conversation.reset(user)),
            BotCommand::Speak(topic) => self.speak(topic.as_deref()),
            BotCommand::Save => match self.save() {
                Ok(()) => Reply::text("Data saved."),
                Err(e) => {
                    log::warn!("save requested by {} failed: {}", user, e);
                    Reply::Text(format!("Save failed: {}", e))
                }
            },
            BotCommand::LockHistory => self.lock_history(user)?,
            BotCommand::UnlockHistory => self.unlock_history(user)?,
            BotCommand::LockStatus => {
                let status = self.locks.status(&self.config.history_resource)?;
                Reply::Text(describe_status(&status))
            }
            BotCommand::Unknown(name) => Reply::Text(self.unknown_command(&name)),
        };
        Ok(vec![reply])
    }

    /// Free, or held by `user`.
    fn may_touch_history(&self, user: UserId) -> Result<bool> {
        let status = self.locks.status(&self.config.history_resource)?;
        Ok(status.holder.is_none_or(|holder| holder == user))
    }

    fn locked_notice(&self) -> String {
        format!(
            "The history is locked by another user. Type `{}lockhistory` to join the queue.",
            self.config.command_prefix
        )
    }

    fn show_history(&self, user: UserId) -> Reply {
        if self.history.all_commands(user).is_empty() {
            Reply::text("Your history is empty.")
        } else {
            Reply::Text(format!("Your history:\n{}", self.history.export_text(user)))
        }
    }

    fn stats(&self, user: UserId) -> Reply {
        match self.history.all_commands(user).len() {
            0 => Reply::text("You haven't used any commands yet."),
            n => Reply::Text(format!("You have used **{}** commands in total.", n)),
        }
    }

    fn export(&self, user: UserId) -> Reply {
        if self.history.all_commands(user).is_empty() {
            return Reply::text("Your history is empty, nothing to export.");
        }

        let path = self.config.export_path(&format!("history_{}.txt", user));
        let content = format!(
            "History of user {} (exported {})\n\n{}\n",
            user,
            Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            self.history.export_text(user)
        );
        match atomic_write_file(&path, &content) {
            Ok(()) => Reply::File(path),
            Err(e) => {
                log::warn!("export for {} failed: {}", user, e);
                Reply::Text(format!("Export failed: {}", e))
            }
        }
    }

    fn speak(&self, topic: Option<&str>) -> Reply {
        match topic {
            None => Reply::Text(format!(
                "Possible topics: {}",
                self.conversation.supported_topics().join(", ")
            )),
            Some(topic) if self.conversation.speak_about(topic) => {
                Reply::text("Yes, I talk about that topic.")
            }
            Some(_) => Reply::text("Sorry, that topic isn't covered."),
        }
    }

    fn lock_history(&self, user: UserId) -> Result<Reply> {
        let acquisition = self.locks.acquire(&self.config.history_resource, user)?;
        let text = match acquisition.outcome {
            AcquireOutcome::Acquired => {
                "You now hold the history lock. Nobody else can access it.".to_string()
            }
            AcquireOutcome::AlreadyHeld => "You already hold the history lock.".to_string(),
            AcquireOutcome::Queued => format!(
                "The lock is taken. You are in the queue (position {}).",
                acquisition.position
            ),
        };
        Ok(Reply::Text(text))
    }

    fn unlock_history(&self, user: UserId) -> Result<Reply> {
        let release = self.locks.release(&self.config.history_resource, &user)?;
        let text = match (release.outcome, release.transferred_to) {
            (ReleaseOutcome::NotHolder, _) => {
                "You don't hold the lock, so you can't release it.".to_string()
            }
            (ReleaseOutcome::Transferred, Some(next)) => format!(
                "Lock transferred automatically to the next user (ID: {}).",
                next
            ),
            (ReleaseOutcome::Released, _) | (ReleaseOutcome::Transferred, None) => {
                "Lock released. The history is free again.".to_string()
            }
        };
        Ok(Reply::Text(text))
    }

    fn unknown_command(&self, name: &str) -> String {
        let prefix = &self.config.command_prefix;
        let known: Vec<String> = COMMAND_NAMES
            .iter()
            .map(|c| format!("{}{}", prefix, c))
            .collect();
        format!(
            "Unknown command `{}{}`. Available commands: {}",
            prefix,
            name,
            known.join(", ")
        )
    }
}

fn describe_status(status: &LockStatus<UserId>) -> String {
    let Some(holder) = status.holder else {
        return "The history lock is free.".to_string();
    };
    if status.waiters.is_empty() {
        return format!("The history lock is held by {}. Nobody is waiting.", holder);
    }
    let queue: Vec<String> = status.waiters.iter().map(UserId::to_string).collect();
    format!(
        "The history lock is held by {}. Queue: {}",
        holder,
        queue.join(", ")
    )
}
