//! Appends executed commands to the invoking shell's history file so they
//! show up in normal history recall. Best-effort throughout: a command that
//! ran is a success even if recording it failed.

use crate::shell::ShellContext;
use anyhow::Result;
use chrono::Utc;
use regex::Regex;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryFormat {
    Plain,
    ZshExtended,
}

/// Classifies a history file by inspecting its existing content. A file
/// with at least one `: <epoch>:<duration>;<command>` line is extended;
/// everything else, including empty and nonexistent files, is plain.
pub fn detect_format(path: &Path) -> HistoryFormat {
    let Ok(bytes) = fs::read(path) else {
        return HistoryFormat::Plain;
    };
    let content = String::from_utf8_lossy(&bytes);

    let Ok(extended) = Regex::new(r"^:\s*\d+:\d+;") else {
        return HistoryFormat::Plain;
    };
    if content.lines().any(|line| extended.is_match(line)) {
        HistoryFormat::ZshExtended
    } else {
        HistoryFormat::Plain
    }
}

pub fn format_entry(format: HistoryFormat, command: &str, epoch: i64) -> String {
    match format {
        HistoryFormat::Plain => format!("{}\n", command),
        HistoryFormat::ZshExtended => format!(": {}:0;{}\n", epoch, command),
    }
}

/// Records `command` in the shell's history file. Failures are logged and
/// absorbed; they must never read as a command-execution error.
pub fn append(ctx: &ShellContext, command: &str) {
    let Some(path) = ctx.history_file() else {
        return;
    };

    if let Err(e) = append_to_file(&path, command) {
        warn!(path = %path.display(), error = %e, "failed to record command in shell history");
    }
}

fn append_to_file(path: &Path, command: &str) -> Result<()> {
    let entry = format_entry(detect_format(path), command, Utc::now().timestamp());

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(entry.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_entry_is_the_bare_command() {
        assert_eq!(
            format_entry(HistoryFormat::Plain, "git status", 1700000000),
            "git status\n"
        );
    }

    #[test]
    fn extended_entry_carries_epoch_and_zero_duration() {
        assert_eq!(
            format_entry(HistoryFormat::ZshExtended, "git status", 1700000000),
            ": 1700000000:0;git status\n"
        );
    }
}
