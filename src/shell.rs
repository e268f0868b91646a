use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellKind {
    Zsh,
    Bash,
    Other,
}

/// Everything the history writer needs to know about the invoking shell.
/// Derived from the environment at execution time, never persisted.
#[derive(Debug, Clone)]
pub struct ShellContext {
    pub shell_path: String,
    pub histfile_override: Option<PathBuf>,
    pub home: Option<PathBuf>,
}

impl ShellContext {
    pub fn from_env() -> Self {
        Self {
            shell_path: env::var("SHELL").unwrap_or_default(),
            histfile_override: env::var("HISTFILE")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            home: dirs::home_dir(),
        }
    }

    pub fn kind(&self) -> ShellKind {
        // Match on the final path component so /usr/local/bin/zsh works too.
        let name = self.shell_path.rsplit('/').next().unwrap_or("");
        match name {
            "zsh" => ShellKind::Zsh,
            "bash" => ShellKind::Bash,
            _ => ShellKind::Other,
        }
    }

    /// The history file commands should be appended to. `HISTFILE` wins
    /// verbatim regardless of shell; otherwise the shell's conventional
    /// default. Unrecognized shells get no history file at all.
    pub fn history_file(&self) -> Option<PathBuf> {
        if let Some(path) = &self.histfile_override {
            return Some(path.clone());
        }

        let home = self.home.as_ref()?;
        match self.kind() {
            ShellKind::Zsh => Some(home.join(".zsh_history")),
            ShellKind::Bash => Some(home.join(".bash_history")),
            ShellKind::Other => None,
        }
    }
}
