//! Reboot: restart the game server on a running instance.

use crate::application::ports::{CloudInstances, GameServer, ProgressReporter};
use crate::application::services::GENERIC_FAILURE;
use crate::domain::{InstanceState, StepContext, StepFailure};

const NOT_RUNNING: &str = "Failed to reboot the server as it is not running.";

/// Run the reboot protocol.
///
/// The game server's reboot call returns once the reboot is done, so the
/// instance state is not checked again afterwards.
///
/// # Errors
///
/// Returns a `StepFailure` naming the first step that failed.
pub async fn reboot(
    cloud: &dyn CloudInstances,
    game: &dyn GameServer,
    reporter: &dyn ProgressReporter,
) -> Result<(), StepFailure> {
    let state = cloud.state().await.step_context(GENERIC_FAILURE)?;
    if state != InstanceState::Running {
        tracing::info!(%state, "refusing to reboot a non-running instance");
        return Err(StepFailure::refused(NOT_RUNNING));
    }

    reporter.step("Server is rebooting.");
    game.reboot().await.step_context(GENERIC_FAILURE)?;

    reporter.success("Successfully rebooted.");
    Ok(())
}
