//! System prompt construction.
//!
//! The response parser depends on the model replying with `COMMAND:` and
//! `EXPLANATION:` lines, so the prompt spells that format out. A custom
//! base prompt from the config replaces the default one, but the OS context
//! is always appended so the model suggests commands that exist on the
//! user's platform.

const DEFAULT_PROMPT: &str = "You are a terminal command expert. \
Given a task described in plain language, reply with exactly two lines:\n\
COMMAND: <the shell command that accomplishes the task>\n\
EXPLANATION: <one short sentence describing what the command does>\n\
Do not wrap the command in backticks or code fences. \
Do not add any other text.";

pub fn system_prompt(custom: &str) -> String {
    let base = if custom.trim().is_empty() {
        DEFAULT_PROMPT
    } else {
        custom
    };
    format!("{}\n\nThe user is on {}.", base, os_name())
}

fn os_name() -> &'static str {
    if cfg!(target_os = "macos") {
        "macOS"
    } else if cfg!(target_os = "linux") {
        "Linux"
    } else if cfg!(windows) {
        "Windows"
    } else {
        "a Unix-like system"
    }
}
