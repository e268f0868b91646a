use crate::theme::Theme;
use anyhow::{anyhow, Result};
use regex::Regex;
use std::io::{self, Read, Write};
use std::process::{Command, Stdio};

/// Package managers probed on Linux, in priority order.
const LINUX_PACKAGE_MANAGERS: &[(&str, &str)] = &[
    ("apt", "sudo apt install"),
    ("dnf", "sudo dnf install"),
    ("pacman", "sudo pacman -S"),
];

/// Runs `command` through the shell, so pipes, globs, and quoting all work.
///
/// stdin and stdout are inherited from the parent; stderr is shown live and
/// buffered so a "command not found" exit (127) can be inspected to print an
/// install hint. The hint is advisory output on stderr; the returned error
/// is the execution failure itself, unchanged.
pub fn run_command(command: &str, theme: &Theme) -> Result<()> {
    let mut child = Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::piped())
        .spawn()?;

    let mut stderr_buf = Vec::new();
    if let Some(mut pipe) = child.stderr.take() {
        let mut chunk = [0u8; 8192];
        while let Ok(n) = pipe.read(&mut chunk) {
            if n == 0 {
                break;
            }
            let _ = io::stderr().write_all(&chunk[..n]);
            stderr_buf.extend_from_slice(&chunk[..n]);
        }
    }

    let status = child.wait()?;
    if status.success() {
        return Ok(());
    }

    if status.code() == Some(127) {
        let stderr_text = String::from_utf8_lossy(&stderr_buf);
        let name = missing_command(&stderr_text, command);
        if !name.is_empty() {
            eprintln!();
            eprintln!(
                "  {} {} is not installed.",
                theme.hint.apply("Hint:"),
                name
            );
            eprintln!("  {}", install_suggestion(&name));
        }
    }

    Err(anyhow!("command failed: {}", status))
}

/// Extracts the missing command name from shell stderr output, falling back
/// to the first token of the original command line.
pub fn missing_command(stderr: &str, command: &str) -> String {
    if let Some(name) = parse_not_found(stderr) {
        return name;
    }
    command
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string()
}

fn parse_not_found(stderr: &str) -> Option<String> {
    // "sh: ss: command not found", "bash: line 1: htop: command not found"
    let posix = Regex::new(r"(?:sh|bash):\s*(?:line \d+:\s*)?(\S+):\s*(?:command )?not found").ok()?;
    if let Some(captures) = posix.captures(stderr) {
        return Some(captures[1].to_string());
    }

    // "zsh: command not found: rg"
    let zsh = Regex::new(r"zsh:\s*command not found:\s*(\S+)").ok()?;
    zsh.captures(stderr).map(|captures| captures[1].to_string())
}

/// A platform-aware suggestion for installing a missing command.
pub fn install_suggestion(name: &str) -> String {
    if cfg!(target_os = "macos") {
        return format!("Install with: brew install {}", name);
    }

    if cfg!(target_os = "linux") {
        for (binary, invocation) in LINUX_PACKAGE_MANAGERS {
            if which::which(binary).is_ok() {
                return format!("Install with: {} {}", invocation, name);
            }
        }
    }

    format!("Install {} using your system package manager", name)
}
