//! Abort window: a cancellable grace period before a disruptive command runs.
//!
//! Each window owns a fresh `CancellationToken`, so an abort requested for
//! one command can never leak into the next. Once the grace period expires
//! the token is detached and later abort requests are no-ops.

use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::application::ports::ProgressReporter;

/// How an abort window ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowOutcome<T> {
    /// The grace period expired and the operation ran.
    Completed(T),
    /// The operator aborted during the grace period; the operation never ran.
    Aborted,
}

/// Abort signal shared between the running window and `/abort`.
#[derive(Debug, Default)]
pub struct AbortWindow {
    active: Mutex<Option<CancellationToken>>,
}

/// Detaches the window's token when the countdown ends, however it ends.
struct ActiveSlot<'a> {
    window: &'a AbortWindow,
}

impl Drop for ActiveSlot<'_> {
    fn drop(&mut self) {
        self.window.slot().take();
    }
}

impl AbortWindow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> MutexGuard<'_, Option<CancellationToken>> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// `true` while a grace period is counting down.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.slot().is_some()
    }

    /// Ask the open window, if any, to abort.
    ///
    /// Returns `false` when no grace period is counting down, in which case
    /// nothing happens.
    pub fn request_abort(&self) -> bool {
        match self.slot().as_ref() {
            Some(token) => {
                token.cancel();
                true
            }
            None => false,
        }
    }

    /// Count down `grace`, then run `operation` unless aborted first.
    ///
    /// The operator is told how long they have on entry and told again if
    /// the command is aborted. Aborts arriving after expiry have no effect on
    /// this invocation.
    pub async fn run<F, Fut>(
        &self,
        grace: Duration,
        reporter: &dyn ProgressReporter,
        operation: F,
    ) -> WindowOutcome<Fut::Output>
    where
        F: FnOnce() -> Fut,
        Fut: Future,
    {
        let token = CancellationToken::new();
        *self.slot() = Some(token.clone());
        let slot = ActiveSlot { window: self };

        reporter.step(&format!(
            "You have {} seconds to abort this command.",
            grace.as_secs()
        ));

        let aborted = tokio::select! {
            biased;
            () = token.cancelled() => true,
            () = tokio::time::sleep(grace) => false,
        };
        drop(slot);

        if aborted {
            tracing::info!("command aborted during grace period");
            reporter.warn("Command aborted.");
            return WindowOutcome::Aborted;
        }
        WindowOutcome::Completed(operation().await)
    }
}
