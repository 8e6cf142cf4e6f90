//! Boot: start the instance, wait for it to run, let the OS settle, then
//! start the game server.

use std::time::Duration;

use crate::application::poller::{PollOutcome, poll_until};
use crate::application::ports::{CloudInstances, GameServer, ProgressReporter};
use crate::application::services::GENERIC_FAILURE;
use crate::domain::{InstanceState, StepContext, StepFailure};

const NOT_SETTLED: &str =
    "Failed to initialize boot. Use /status to check if the server is stopped.";
const NEVER_RAN: &str =
    "Something went wrong. Wait until /status says the server is running before using /reboot.";
const SERVER_START_FAILED: &str = "Something went wrong. Use /reboot.";

/// Timing of the boot protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootTimings {
    /// Delay between instance state probes.
    pub poll_interval: Duration,
    /// Give up waiting for `running` after this long.
    pub poll_timeout: Duration,
    /// Wait after `running` before the game server is started.
    pub settle_delay: Duration,
}

impl Default for BootTimings {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(5),
            poll_timeout: Duration::from_secs(120),
            settle_delay: Duration::from_secs(30),
        }
    }
}

/// Run the boot protocol.
///
/// # Errors
///
/// Returns a `StepFailure` naming the first step that failed. No earlier
/// step is rolled back.
pub async fn boot(
    cloud: &dyn CloudInstances,
    game: &dyn GameServer,
    timings: BootTimings,
    reporter: &dyn ProgressReporter,
) -> Result<(), StepFailure> {
    let state = cloud.state().await.step_context(GENERIC_FAILURE)?;
    if !state.is_settled() {
        tracing::info!(%state, "refusing to boot from transitional state");
        return Err(StepFailure::refused(NOT_SETTLED));
    }

    reporter.step("Server is booting up.");

    if state == InstanceState::Stopped {
        cloud.start().await.step_context(GENERIC_FAILURE)?;
        tracing::info!("instance start requested");
    }

    let outcome = poll_until(
        move || async move { cloud.state().await.map(|s| s == InstanceState::Running) },
        timings.poll_interval,
        timings.poll_timeout,
    )
    .await;
    if outcome == PollOutcome::TimedOut {
        tracing::warn!(
            timeout_secs = timings.poll_timeout.as_secs(),
            "instance did not reach running"
        );
        return Err(StepFailure::refused(NEVER_RAN));
    }

    tracing::info!(
        settle_secs = timings.settle_delay.as_secs(),
        "instance running, waiting for OS to settle"
    );
    tokio::time::sleep(timings.settle_delay).await;

    game.start().await.step_context(SERVER_START_FAILED)?;

    reporter.success("Successfully booted up.");
    Ok(())
}
