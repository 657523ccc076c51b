//! History log storage and snapshot conversion.

use crate::structures::KeyedStore;
use crate::user::UserId;
use std::collections::BTreeMap;

/// Serialized form: decimal user id to commands, oldest first.
pub type HistorySnapshot = BTreeMap<String, Vec<String>>;

/// Per-user command history backed by a keyed store.
#[derive(Debug, Default)]
pub struct HistoryLog {
    table: KeyedStore<UserId, Vec<String>>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `command` to the user's history, creating it if needed.
    pub fn add_command(&mut self, user: UserId, command: impl Into<String>) {
        self.table
            .get_or_insert_with(user, Vec::new)
            .push(command.into());
    }

    /// The most recent command, if any.
    pub fn last_command(&self, user: UserId) -> Option<&str> {
        self.table
            .get(&user)
            .and_then(|cmds| cmds.last())
            .map(String::as_str)
    }

    /// All commands, oldest first. Empty for unknown users.
    pub fn all_commands(&self, user: UserId) -> &[String] {
        self.table.get(&user).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Empty the user's history but keep their entry.
    pub fn clear(&mut self, user: UserId) {
        if let Some(cmds) = self.table.get_mut(&user) {
            cmds.clear();
        }
    }

    /// Remove the user's entry entirely. Returns `true` if one existed.
    pub fn delete_user(&mut self, user: UserId) -> bool {
        self.table.delete(&user)
    }

    /// Numbered listing (`"1. !ping"`), one command per line.
    pub fn export_text(&self, user: UserId) -> String {
        self.all_commands(user)
            .iter()
            .enumerate()
            .map(|(i, cmd)| format!("{}. {}", i + 1, cmd))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Users with an entry (possibly empty), sorted.
    pub fn users(&self) -> Vec<UserId> {
        let mut users: Vec<UserId> = self.table.keys().copied().collect();
        users.sort();
        users
    }

    pub fn to_snapshot(&self) -> HistorySnapshot {
        self.table
            .keys()
            .map(|user| (user.to_string(), self.all_commands(*user).to_vec()))
            .collect()
    }

    /// Load a snapshot, replacing the history of every user it names.
    ///
    /// Keys that are not numeric user ids are skipped.
    pub fn load_snapshot(&mut self, snapshot: HistorySnapshot) {
        for (key, commands) in snapshot {
            match key.parse::<UserId>() {
                Ok(user) => self.table.set(user, commands),
                Err(_) => log::warn!("skipping history entry with invalid user id '{}'", key),
            }
        }
    }
}
