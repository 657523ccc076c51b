//! Implementation of the `palaver run` command.
//!
//! Each input line is one chat message: `<user_id> <message>`. Blank lines
//! and lines starting with `#` are skipped; a line whose user id does not
//! parse is reported and skipped. Replies are written as
//! `[to <user_id>] <text>`.

use crate::bot::{Bot, Reply};
use crate::cli::RunArgs;
use crate::config::Config;
use crate::error::{PalaverError, Result};
use crate::user::UserId;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

/// Counters reported when a session ends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub messages: usize,
    pub replies: usize,
    pub skipped: usize,
}

/// Execute the `palaver run` command.
pub fn cmd_run(args: RunArgs) -> Result<()> {
    let config = Config::load_or_default(&args.config)?;
    let mut bot = Bot::load(config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = match &args.input {
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                PalaverError::UserError(format!(
                    "failed to open input '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            run_session(&mut bot, BufReader::new(file), &mut out)?
        }
        None => run_session(&mut bot, io::stdin().lock(), &mut out)?,
    };

    log::info!(
        "session ended: {} messages, {} replies, {} skipped lines",
        summary.messages,
        summary.replies,
        summary.skipped
    );
    bot.save()
}

/// Feed every line of `input` to the bot and write replies to `out`.
pub fn run_session<R: BufRead, W: Write>(
    bot: &mut Bot,
    input: R,
    out: &mut W,
) -> Result<SessionSummary> {
    let mut summary = SessionSummary::default();

    for (index, line) in input.lines().enumerate() {
        let line = line
            .map_err(|e| PalaverError::UserError(format!("failed to read input: {}", e)))?;

        let (user, message) = match parse_line(&line) {
            Ok(Some(parsed)) => parsed,
            Ok(None) => continue,
            Err(e) => {
                log::warn!("line {}: {}", index + 1, e);
                eprintln!("Warning: line {}: {}", index + 1, e);
                summary.skipped += 1;
                continue;
            }
        };

        summary.messages += 1;
        for reply in bot.handle_message(user, message)? {
            write_reply(out, user, &reply)?;
            summary.replies += 1;
        }
    }

    Ok(summary)
}

/// Split a session line into its user id and message.
///
/// Returns `Ok(None)` for blank lines and `#` comments.
pub fn parse_line(line: &str) -> Result<Option<(UserId, &str)>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (id, message) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let user = id.parse::<UserId>().map_err(|_| {
        PalaverError::UserError(format!("expected '<user_id> <message>', got {:?}", line))
    })?;

    Ok(Some((user, message.trim())))
}

fn write_reply<W: Write>(out: &mut W, user: UserId, reply: &Reply) -> Result<()> {
    let written = match reply {
        Reply::Text(text) => writeln!(out, "[to {}] {}", user, text),
        Reply::File(path) => writeln!(out, "[to {}] (file) {}", user, path.display()),
    };
    written.map_err(|e| PalaverError::UserError(format!("failed to write reply: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_CONFIG_FILE;
    use crate::test_support::DirGuard;
    use serial_test::serial;
    use tempfile::TempDir;

    fn bot_in(temp_dir: &TempDir) -> Bot {
        Bot::new(Config {
            data_dir: temp_dir.path().join("data").to_string_lossy().to_string(),
            export_dir: temp_dir.path().to_string_lossy().to_string(),
            ..Config::default()
        })
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("42 !helpme").unwrap(), Some((UserId(42), "!helpme")));
        assert_eq!(
            parse_line("  7   speak about web ").unwrap(),
            Some((UserId(7), "speak about web"))
        );
        assert_eq!(parse_line("7").unwrap(), Some((UserId(7), "")));
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("# comment").unwrap(), None);
        assert!(parse_line("alice !helpme").is_err());
    }

    #[test]
    fn test_session_transcript() {
        let temp_dir = TempDir::new().unwrap();
        let mut bot = bot_in(&temp_dir);
        let input = "\
# two users contend for the history
1 !lockhistory
2 !lockhistory
2 !history
1 !unlockhistory
not-a-user hello
2 !lockstatus
";
        let mut out = Vec::new();

        let summary = run_session(&mut bot, input.as_bytes(), &mut out).unwrap();

        assert_eq!(
            summary,
            SessionSummary {
                messages: 5,
                replies: 5,
                skipped: 1,
            }
        );
        let transcript = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = transcript.lines().collect();
        assert_eq!(
            lines,
            vec![
                "[to 1] You now hold the history lock. Nobody else can access it.",
                "[to 2] The lock is taken. You are in the queue (position 1).",
                "[to 2] The history is locked by another user. Type `!lockhistory` to join the queue.",
                "[to 1] Lock transferred automatically to the next user (ID: 2).",
                "[to 2] The history lock is held by 2. Nobody is waiting.",
            ]
        );
    }

    #[test]
    fn test_session_reports_exported_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut bot = bot_in(&temp_dir);
        let mut out = Vec::new();

        run_session(&mut bot, "5 !export\n".as_bytes(), &mut out).unwrap();

        let expected = format!(
            "[to 5] (file) {}\n",
            temp_dir.path().join("history_5.txt").display()
        );
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    #[serial]
    fn test_cmd_run_with_defaults_saves_into_working_dir() {
        let temp_dir = TempDir::new().unwrap();
        let _guard = DirGuard::new(temp_dir.path());
        std::fs::write("session.txt", "9 !speak\n9 !helpme\n9 music\n").unwrap();

        cmd_run(RunArgs {
            config: DEFAULT_CONFIG_FILE.into(),
            input: Some("session.txt".into()),
        })
        .unwrap();

        let config = Config::default();
        let restored = Bot::load(config);
        assert_eq!(restored.history().all_commands(UserId(9)), ["!speak", "!helpme"]);
        assert_eq!(restored.conversation().path(UserId(9)), ["music"]);
        assert!(temp_dir.path().join("data").join("history_data.json").exists());
    }

    #[test]
    #[serial]
    fn test_cmd_run_missing_input_is_user_error() {
        let temp_dir = TempDir::new().unwrap();
        let _guard = DirGuard::new(temp_dir.path());

        let err = cmd_run(RunArgs {
            config: DEFAULT_CONFIG_FILE.into(),
            input: Some("missing.txt".into()),
        })
        .unwrap_err();

        assert!(matches!(err, PalaverError::UserError(_)));
    }
}
