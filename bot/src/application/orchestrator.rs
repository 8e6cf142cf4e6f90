//! Command orchestrator: owns the execution gate and abort signal and runs
//! each command's protocol against the external control ports.
//!
//! The gate and the abort window are the only shared mutable state in the
//! process; both live here rather than as globals.

use std::future::Future;
use std::sync::Arc;

use crate::application::abort_window::{AbortWindow, WindowOutcome};
use crate::application::gate::ExecutionGate;
use crate::application::ports::{CloudInstances, GameServer, ProgressReporter};
use crate::application::services::boot::{self, BootTimings};
use crate::application::services::status::{self, STATUS_UNAVAILABLE};
use crate::application::services::{reboot, shutdown};
use crate::domain::{Command, StepFailure};

/// Reply to `/abort` when no grace period is counting down.
pub const NOTHING_TO_ABORT: &str = "There is no command to abort.";

/// Runs commands against the cloud instance and game server.
///
/// Cheap to share behind an `Arc`; every method takes `&self` and may be
/// called from concurrent tasks.
pub struct Orchestrator {
    cloud: Arc<dyn CloudInstances>,
    game: Arc<dyn GameServer>,
    gate: ExecutionGate,
    abort: AbortWindow,
    boot_timings: BootTimings,
}

impl Orchestrator {
    #[must_use]
    pub fn new(cloud: Arc<dyn CloudInstances>, game: Arc<dyn GameServer>) -> Self {
        Self {
            cloud,
            game,
            gate: ExecutionGate::new(),
            abort: AbortWindow::new(),
            boot_timings: BootTimings::default(),
        }
    }

    #[must_use]
    pub fn with_boot_timings(mut self, timings: BootTimings) -> Self {
        self.boot_timings = timings;
        self
    }

    /// `true` while a disruptive command holds the gate.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.gate.is_busy()
    }

    /// `true` while a grace period is counting down.
    #[must_use]
    pub fn is_abortable(&self) -> bool {
        self.abort.is_open()
    }

    // ── Disruptive commands ──────────────────────────────────────────────────

    pub async fn boot(&self, reporter: &dyn ProgressReporter) {
        let (cloud, game) = (self.cloud.as_ref(), self.game.as_ref());
        let timings = self.boot_timings;
        self.gated(Command::Boot, reporter, || {
            boot::boot(cloud, game, timings, reporter)
        })
        .await;
    }

    pub async fn shutdown(&self, reporter: &dyn ProgressReporter) {
        let (cloud, game) = (self.cloud.as_ref(), self.game.as_ref());
        self.gated(Command::Shutdown, reporter, || {
            shutdown::shutdown(cloud, game, reporter)
        })
        .await;
    }

    pub async fn reboot(&self, reporter: &dyn ProgressReporter) {
        let (cloud, game) = (self.cloud.as_ref(), self.game.as_ref());
        self.gated(Command::Reboot, reporter, || {
            reboot::reboot(cloud, game, reporter)
        })
        .await;
    }

    // ── Non-disruptive commands ──────────────────────────────────────────────

    pub async fn status(&self, reporter: &dyn ProgressReporter) {
        let report = status::status(self.cloud.as_ref(), self.game.as_ref()).await;
        if report.state.is_none() {
            reporter.warn(STATUS_UNAVAILABLE);
        }
        reporter.step(&report.to_string());
    }

    /// Abort the command whose grace period is counting down, if any.
    pub fn abort(&self, reporter: &dyn ProgressReporter) {
        if self.abort.request_abort() {
            tracing::info!("abort requested");
        } else {
            tracing::info!("abort requested with no open grace period");
            reporter.step(NOTHING_TO_ABORT);
        }
    }

    // ── Private helpers ──────────────────────────────────────────────────────

    /// Hold the gate, count down the grace period, then run `protocol`.
    async fn gated<F, Fut>(&self, command: Command, reporter: &dyn ProgressReporter, protocol: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), StepFailure>>,
    {
        let grace = command.grace_period().unwrap_or_default();
        let run = self.abort.run(grace, reporter, protocol);

        match self.gate.run_exclusive(run).await {
            Err(busy) => {
                tracing::info!(%command, "rejected: another command is in progress");
                reporter.step(&busy.to_string());
            }
            Ok(WindowOutcome::Aborted) => {
                tracing::info!(%command, "command aborted");
            }
            Ok(WindowOutcome::Completed(Ok(()))) => {
                tracing::info!(%command, "command completed");
            }
            Ok(WindowOutcome::Completed(Err(failure))) => {
                match &failure.source {
                    Some(error) => tracing::warn!(%command, %error, "command failed"),
                    None => tracing::info!(%command, reason = failure.message, "command refused"),
                }
                reporter.warn(failure.message);
            }
        }
    }
}
