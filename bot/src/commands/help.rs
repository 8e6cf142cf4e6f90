//! `/start` and `/help` replies.

use crate::domain::Command;

pub const GREETING: &str = "Hello, I'm ready for your next command. Use /help for a list of commands. If the server is outdated, use /reboot to update it.";

/// Numbered list of every command, one per line.
#[must_use]
pub fn command_list() -> String {
    Command::ALL
        .iter()
        .enumerate()
        .map(|(i, cmd)| format!("{}. /{cmd}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
