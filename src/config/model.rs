//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for the palaver bot.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Chat settings
    // =========================================================================
    /// Prefix that marks a message as a command (default: "!").
    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,

    // =========================================================================
    // Storage settings
    // =========================================================================
    /// Directory holding the JSON snapshots (default: "data").
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// History snapshot file name inside `data_dir`.
    #[serde(default = "default_history_file")]
    pub history_file: String,

    /// Conversation snapshot file name inside `data_dir`.
    #[serde(default = "default_conversation_file")]
    pub conversation_file: String,

    /// Directory where `export` writes `history_<user>.txt` (default: ".").
    #[serde(default = "default_export_dir")]
    pub export_dir: String,

    // =========================================================================
    // Lock settings
    // =========================================================================
    /// Name of the lock resource guarding history commands.
    #[serde(default = "default_history_resource")]
    pub history_resource: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            command_prefix: default_command_prefix(),
            data_dir: default_data_dir(),
            history_file: default_history_file(),
            conversation_file: default_conversation_file(),
            export_dir: default_export_dir(),
            history_resource: default_history_resource(),
        }
    }
}
