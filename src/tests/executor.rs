use crate::executor::{install_suggestion, missing_command, run_command};
use crate::theme::Theme;

#[test]
fn missing_command_from_sh_stderr() {
    let name = missing_command("sh: ss: command not found\n", "ss -tuln");
    assert_eq!(name, "ss");
}

#[test]
fn missing_command_from_bash_stderr_with_line_number() {
    let name = missing_command("bash: line 1: htop: command not found\n", "htop");
    assert_eq!(name, "htop");
}

#[test]
fn missing_command_from_zsh_stderr() {
    let name = missing_command("zsh: command not found: rg\n", "rg foo");
    assert_eq!(name, "rg");
}

#[test]
fn missing_command_falls_back_to_first_token() {
    let name = missing_command("some unexpected error\n", "nonexistent --flag");
    assert_eq!(name, "nonexistent");
}

#[test]
fn missing_command_empty_when_nothing_to_fall_back_on() {
    assert_eq!(missing_command("garbage\n", ""), "");
}

#[test]
fn install_suggestion_names_the_command() {
    assert!(install_suggestion("ripgrep").contains("ripgrep"));
}

#[test]
fn run_command_succeeds_for_true() {
    assert!(run_command("true", &Theme::monochrome()).is_ok());
}

#[test]
fn run_command_reports_nonzero_exit() {
    assert!(run_command("false", &Theme::monochrome()).is_err());
}

#[test]
fn run_command_reports_missing_command() {
    let result = run_command("this_command_does_not_exist_xyz123", &Theme::monochrome());
    assert!(result.is_err());
}

#[test]
fn run_command_supports_shell_syntax() {
    assert!(run_command("true && echo piped | grep -q piped", &Theme::monochrome()).is_ok());
}
