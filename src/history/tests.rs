//! Tests for the history log.

use super::*;
use crate::user::UserId;

const USER: UserId = UserId(123456789);

fn sample_log() -> HistoryLog {
    let mut log = HistoryLog::new();
    log.add_command(USER, "!ping");
    log.add_command(USER, "!help");
    log.add_command(USER, "!play song");
    log
}

#[test]
fn test_add_and_list_commands() {
    let log = sample_log();

    assert_eq!(log.all_commands(USER), ["!ping", "!help", "!play song"]);
    assert_eq!(log.last_command(USER), Some("!play song"));
}

#[test]
fn test_unknown_user_has_empty_history() {
    let log = HistoryLog::new();

    assert!(log.all_commands(UserId(1)).is_empty());
    assert_eq!(log.last_command(UserId(1)), None);
    assert_eq!(log.export_text(UserId(1)), "");
}

#[test]
fn test_export_text_is_numbered() {
    let log = sample_log();

    assert_eq!(log.export_text(USER), "1. !ping\n2. !help\n3. !play song");
}

#[test]
fn test_clear_keeps_entry() {
    let mut log = sample_log();
    log.clear(USER);

    assert!(log.all_commands(USER).is_empty());
    assert_eq!(log.last_command(USER), None);
    assert_eq!(log.users(), vec![USER]);
}

#[test]
fn test_clear_unknown_user_is_noop() {
    let mut log = HistoryLog::new();
    log.clear(USER);

    assert!(log.users().is_empty());
}

#[test]
fn test_delete_user() {
    let mut log = sample_log();

    assert!(log.delete_user(USER));
    assert!(!log.delete_user(USER));
    assert!(log.users().is_empty());
}

#[test]
fn test_histories_are_per_user() {
    let mut log = HistoryLog::new();
    log.add_command(UserId(1), "!a");
    log.add_command(UserId(2), "!b");

    assert_eq!(log.all_commands(UserId(1)), ["!a"]);
    assert_eq!(log.all_commands(UserId(2)), ["!b"]);
}

#[test]
fn test_snapshot_reload() {
    let mut log = sample_log();
    log.add_command(UserId(111), "!save");
    let snapshot = log.to_snapshot();

    assert_eq!(snapshot["123456789"], ["!ping", "!help", "!play song"]);

    let mut reloaded = HistoryLog::new();
    reloaded.load_snapshot(snapshot);
    assert_eq!(reloaded.all_commands(USER), log.all_commands(USER));
    assert_eq!(reloaded.all_commands(UserId(111)), ["!save"]);
}

#[test]
fn test_load_snapshot_skips_invalid_keys() {
    let mut snapshot = HistorySnapshot::new();
    snapshot.insert("42".to_string(), vec!["!ok".to_string()]);
    snapshot.insert("not-a-user".to_string(), vec!["!lost".to_string()]);

    let mut log = HistoryLog::new();
    log.load_snapshot(snapshot);

    assert_eq!(log.users(), vec![UserId(42)]);
}
