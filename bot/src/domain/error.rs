//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.

use thiserror::Error;

// ── Adapter errors ────────────────────────────────────────────────────────────

/// Failure of a call against the cloud instance manager or the game server.
///
/// Always handled at the step that issued the call; never reaches the
/// dispatcher.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The underlying command or request could not be carried out.
    #[error("{operation} failed: {reason}")]
    Failed {
        operation: &'static str,
        reason: String,
    },

    /// The remote side answered with a non-success status.
    #[error("{operation} returned status {status}")]
    Status { operation: &'static str, status: u16 },

    /// The remote side answered, but not with the expected shape.
    #[error("invalid {what}: {reason}")]
    InvalidData { what: &'static str, reason: String },
}

impl AdapterError {
    pub fn failed(operation: &'static str, reason: impl ToString) -> Self {
        Self::Failed {
            operation,
            reason: reason.to_string(),
        }
    }

    pub fn invalid(what: &'static str, reason: impl ToString) -> Self {
        Self::InvalidData {
            what,
            reason: reason.to_string(),
        }
    }
}

// ── Gate errors ───────────────────────────────────────────────────────────────

/// A disruptive command was requested while another one held the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("There is another command being executed.")]
pub struct GateBusy;

// ── Step failures ─────────────────────────────────────────────────────────────

/// A command step failed; `message` is what the operator is told.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct StepFailure {
    pub message: &'static str,
    #[source]
    pub source: Option<AdapterError>,
}

impl StepFailure {
    /// A failure that is a precondition check, not an adapter error.
    #[must_use]
    pub const fn refused(message: &'static str) -> Self {
        Self {
            message,
            source: None,
        }
    }
}

/// Attach an operator-facing message to an adapter result.
pub trait StepContext<T> {
    /// # Errors
    ///
    /// Returns a `StepFailure` carrying `message` if `self` is an error.
    fn step_context(self, message: &'static str) -> Result<T, StepFailure>;
}

impl<T> StepContext<T> for Result<T, AdapterError> {
    fn step_context(self, message: &'static str) -> Result<T, StepFailure> {
        self.map_err(|source| StepFailure {
            message,
            source: Some(source),
        })
    }
}
