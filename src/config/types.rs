//! Configuration defaults for palaver.

/// File name looked up when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "palaver.yaml";

// Default value functions for serde
pub(crate) fn default_command_prefix() -> String {
    "!".to_string()
}
pub(crate) fn default_data_dir() -> String {
    "data".to_string()
}
pub(crate) fn default_history_file() -> String {
    "history_data.json".to_string()
}
pub(crate) fn default_conversation_file() -> String {
    "conversation_data.json".to_string()
}
pub(crate) fn default_export_dir() -> String {
    ".".to_string()
}
pub(crate) fn default_history_resource() -> String {
    "history".to_string()
}
