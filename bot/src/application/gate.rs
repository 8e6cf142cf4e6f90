//! Execution gate: at most one disruptive command runs at a time.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::GateBusy;

/// Process-wide mutual exclusion for disruptive commands.
///
/// Acquisition never waits: a second caller is turned away with
/// [`GateBusy`] rather than queued.
#[derive(Debug, Default)]
pub struct ExecutionGate {
    busy: AtomicBool,
}

/// Holds the gate; releases it on drop.
#[derive(Debug)]
pub struct GatePass<'a> {
    busy: &'a AtomicBool,
}

impl Drop for GatePass<'_> {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

impl ExecutionGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Take the gate if it is free.
    ///
    /// # Errors
    ///
    /// Returns [`GateBusy`] if another holder has not released it yet.
    pub fn try_acquire(&self) -> Result<GatePass<'_>, GateBusy> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| GatePass { busy: &self.busy })
            .map_err(|_| GateBusy)
    }

    /// Run `operation` to completion while holding the gate.
    ///
    /// The gate is released when `operation` finishes, fails, panics, or is
    /// dropped mid-flight. `operation` is not polled at all when the gate is
    /// taken.
    ///
    /// # Errors
    ///
    /// Returns [`GateBusy`] without side effects if the gate is taken.
    pub async fn run_exclusive<F>(&self, operation: F) -> Result<F::Output, GateBusy>
    where
        F: Future,
    {
        let _pass = self.try_acquire()?;
        Ok(operation.await)
    }
}
