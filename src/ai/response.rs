/// A single proposed command extracted from a model response.
///
/// `command` is empty when the response contained no `COMMAND:` line;
/// callers must treat that as "nothing to run" rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSuggestion {
    pub command: String,
    pub explanation: String,
}

impl CommandSuggestion {
    pub fn is_empty(&self) -> bool {
        self.command.is_empty()
    }
}

/// Extracts the command and explanation from raw model output.
///
/// The model is asked to reply with `COMMAND:` and `EXPLANATION:` lines;
/// anything else in the response is ignored. If a prefix appears more than
/// once the last occurrence wins.
pub fn parse_response(response: &str) -> CommandSuggestion {
    let mut suggestion = CommandSuggestion::default();

    for line in response.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("COMMAND:") {
            suggestion.command = strip_backticks(rest.trim()).to_string();
        } else if let Some(rest) = line.strip_prefix("EXPLANATION:") {
            suggestion.explanation = rest.trim().to_string();
        }
    }

    suggestion
}

/// Removes backtick fences the model sometimes wraps commands in, despite
/// being told not to. A lone leading backtick (truncated output) is also
/// stripped; everything else is left untouched.
fn strip_backticks(command: &str) -> &str {
    if let Some(inner) = command
        .strip_prefix("```")
        .and_then(|s| s.strip_suffix("```"))
    {
        return inner;
    }
    if command.len() > 1 {
        if let Some(inner) = command.strip_prefix('`').and_then(|s| s.strip_suffix('`')) {
            return inner;
        }
    }
    command.strip_prefix('`').unwrap_or(command)
}
