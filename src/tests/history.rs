use crate::history::{append, detect_format, HistoryFormat};
use crate::shell::ShellContext;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn context_with_histfile(path: PathBuf) -> ShellContext {
    ShellContext {
        shell_path: "/bin/bash".to_string(),
        histfile_override: Some(path),
        home: None,
    }
}

#[test]
fn extended_file_is_detected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hist");
    fs::write(&path, ": 1700000000:0;ls\n: 1700000001:0;pwd\n").unwrap();

    assert_eq!(detect_format(&path), HistoryFormat::ZshExtended);
}

#[test]
fn plain_file_is_detected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hist");
    fs::write(&path, "ls\npwd\n").unwrap();

    assert_eq!(detect_format(&path), HistoryFormat::Plain);
}

#[test]
fn empty_file_is_plain() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hist");
    fs::write(&path, "").unwrap();

    assert_eq!(detect_format(&path), HistoryFormat::Plain);
}

#[test]
fn nonexistent_file_is_plain() {
    let dir = tempdir().unwrap();
    assert_eq!(
        detect_format(&dir.path().join("no_such_history")),
        HistoryFormat::Plain
    );
}

#[test]
fn mixed_file_counts_as_extended() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hist");
    fs::write(&path, "ls\n: 1700000000:0;pwd\n").unwrap();

    assert_eq!(detect_format(&path), HistoryFormat::ZshExtended);
}

#[test]
fn appends_bare_command_to_plain_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hist");
    fs::write(&path, "ls\n").unwrap();

    append(&context_with_histfile(path.clone()), "echo hello");

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "ls\necho hello\n");
}

#[test]
fn appends_bare_command_to_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hist");

    append(&context_with_histfile(path.clone()), "echo hello");

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "echo hello\n");
}

#[test]
fn appends_extended_entry_to_extended_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hist");
    fs::write(&path, ": 1700000000:0;ls -la\n").unwrap();

    append(&context_with_histfile(path.clone()), "git status");

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with(": 1700000000:0;ls -la\n: "));
    assert!(content.ends_with(":0;git status\n"));
}

#[test]
fn existing_content_is_never_rewritten() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hist");
    fs::write(&path, "first\nsecond\n").unwrap();

    append(&context_with_histfile(path.clone()), "third");

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("first\nsecond\n"));
}

#[test]
fn unsupported_shell_is_a_no_op() {
    let ctx = ShellContext {
        shell_path: "/bin/fish".to_string(),
        histfile_override: None,
        home: Some(PathBuf::from("/nonexistent")),
    };
    // Nothing to assert beyond "does not panic": there is no file to write.
    append(&ctx, "echo hello");
}

#[test]
fn unwritable_history_file_is_absorbed() {
    let ctx = context_with_histfile(PathBuf::from("/nonexistent_dir_xyz/history"));
    append(&ctx, "echo hello");
}
