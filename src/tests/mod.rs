use crate::ai::CommandSuggestion;

mod executor;
mod history;

// Test utilities and helpers
pub(crate) fn suggestion(command: &str, explanation: &str) -> CommandSuggestion {
    CommandSuggestion {
        command: command.to_string(),
        explanation: explanation.to_string(),
    }
}
