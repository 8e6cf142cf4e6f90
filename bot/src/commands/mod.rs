//! Dispatcher: maps chat text to a command handler.
//!
//! Holds no state of its own; everything stateful lives in the
//! [`Orchestrator`].

pub mod help;

use crate::application::{Orchestrator, ProgressReporter};
use crate::domain::Command;

/// Run the command named by `raw` to completion.
///
/// Unknown text gets one "invalid command" reply echoing `raw` as typed.
pub async fn dispatch(orchestrator: &Orchestrator, raw: &str, reporter: &dyn ProgressReporter) {
    let command = match raw.parse::<Command>() {
        Ok(command) => command,
        Err(unknown) => {
            tracing::info!(command = raw, "invalid command");
            reporter.step(&unknown.to_string());
            return;
        }
    };

    tracing::info!(%command, "dispatching");
    match command {
        Command::Start => reporter.step(help::GREETING),
        Command::Help => reporter.step(&help::command_list()),
        Command::Status => orchestrator.status(reporter).await,
        Command::Boot => orchestrator.boot(reporter).await,
        Command::Shutdown => orchestrator.shutdown(reporter).await,
        Command::Reboot => orchestrator.reboot(reporter).await,
        Command::Abort => orchestrator.abort(reporter),
    }
}
