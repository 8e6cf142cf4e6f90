//! The closed set of chat commands and their classification.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// A chat command understood by the bot.
///
/// Parsing is case-insensitive. The declaration order is the order used by
/// `/help`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Start,
    Help,
    Status,
    Boot,
    Shutdown,
    Reboot,
    Abort,
}

/// Raised when chat text does not name any known command.
///
/// Carries the text exactly as received so replies can echo it back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0} is an invalid command.")]
pub struct UnknownCommand(pub String);

impl Command {
    /// Every command, in help order.
    pub const ALL: [Command; 7] = [
        Command::Start,
        Command::Help,
        Command::Status,
        Command::Boot,
        Command::Shutdown,
        Command::Reboot,
        Command::Abort,
    ];

    /// Lower-case name as typed after the leading `/`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Help => "help",
            Command::Status => "status",
            Command::Boot => "boot",
            Command::Shutdown => "shutdown",
            Command::Reboot => "reboot",
            Command::Abort => "abort",
        }
    }

    /// Grace period during which the command can still be aborted.
    ///
    /// Only disruptive commands have one; everything else runs immediately
    /// and bypasses the execution gate.
    #[must_use]
    pub const fn grace_period(self) -> Option<Duration> {
        match self {
            Command::Boot => Some(Duration::from_secs(10)),
            Command::Shutdown | Command::Reboot => Some(Duration::from_secs(30)),
            Command::Start | Command::Help | Command::Status | Command::Abort => None,
        }
    }

    /// Whether the command changes instance or server state.
    #[must_use]
    pub const fn is_disruptive(self) -> bool {
        self.grace_period().is_some()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCommand(s.to_owned()))
    }
}
