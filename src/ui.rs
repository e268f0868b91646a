//! Rendering and the confirmation gate. Rendering is split into pure
//! `render_*` functions returning strings, with thin `display_*` wrappers
//! that print them, so tests can assert on output without capturing stdout.

use crate::ai::CommandSuggestion;
use crate::theme::Theme;
use anyhow::Result;
use std::io::{self, BufRead, Write};

pub fn render(suggestion: &CommandSuggestion, theme: &Theme) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!(
        "  {} {}\n",
        theme.label.apply("$"),
        theme.command.apply(&suggestion.command)
    ));
    if !suggestion.explanation.is_empty() {
        out.push_str(&format!(
            "  {}\n",
            theme.explanation.apply(&suggestion.explanation)
        ));
    }
    out.push('\n');
    out
}

/// Bare command only, for piping into another shell evaluation. Never
/// includes the explanation.
pub fn render_quiet(suggestion: &CommandSuggestion) -> String {
    format!("{}\n", suggestion.command)
}

pub fn display(suggestion: &CommandSuggestion, theme: &Theme) {
    print!("{}", render(suggestion, theme));
}

pub fn display_quiet(suggestion: &CommandSuggestion) {
    print!("{}", render_quiet(suggestion));
}

pub fn display_error(message: &str, theme: &Theme) {
    eprintln!("\n  {} {}\n", theme.error.apply("Error:"), message);
}

/// Prompts for confirmation and reads one line from `reader`. Only a
/// trimmed, case-insensitive `y` or `yes` proceeds; anything else,
/// including empty input and EOF, declines without error.
pub fn confirm(reader: &mut impl BufRead) -> Result<bool> {
    print!("  Run this command? [y/N] ");
    io::stdout().flush()?;

    let mut input = String::new();
    reader.read_line(&mut input)?;

    let input = input.trim().to_lowercase();
    Ok(input == "y" || input == "yes")
}
