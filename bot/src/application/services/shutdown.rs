//! Shutdown: stop the game server, then the instance.

use crate::application::ports::{CloudInstances, GameServer, ProgressReporter};
use crate::application::services::GENERIC_FAILURE;
use crate::domain::{InstanceState, StepContext, StepFailure};

const NOT_SETTLED: &str =
    "Failed to initialize shut down. Use /status to check if the server is running.";

/// Run the shutdown protocol. An already stopped instance is reported and
/// left alone.
///
/// # Errors
///
/// Returns a `StepFailure` naming the first step that failed.
pub async fn shutdown(
    cloud: &dyn CloudInstances,
    game: &dyn GameServer,
    reporter: &dyn ProgressReporter,
) -> Result<(), StepFailure> {
    let state = cloud.state().await.step_context(GENERIC_FAILURE)?;
    if !state.is_settled() {
        tracing::info!(%state, "refusing to shut down from transitional state");
        return Err(StepFailure::refused(NOT_SETTLED));
    }
    if state == InstanceState::Stopped {
        reporter.success("Server is already shut down.");
        return Ok(());
    }

    reporter.step("Server is shutting down.");
    game.stop().await.step_context(GENERIC_FAILURE)?;
    cloud.stop().await.step_context(GENERIC_FAILURE)?;

    reporter.success("Successfully shut down.");
    Ok(())
}
