//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::process::Output;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::{AdapterError, InstanceState};

// ── External Control Ports ────────────────────────────────────────────────────

/// The cloud instance manager, scoped to one fixed instance.
#[async_trait]
pub trait CloudInstances: Send + Sync {
    /// Query the instance's current lifecycle state.
    async fn state(&self) -> Result<InstanceState, AdapterError>;
    /// Request the instance to start. Returns once the request is accepted.
    async fn start(&self) -> Result<(), AdapterError>;
    /// Request the instance to stop. Returns once the request is accepted.
    async fn stop(&self) -> Result<(), AdapterError>;
}

/// The game server's application-level control API.
#[async_trait]
pub trait GameServer: Send + Sync {
    async fn start(&self) -> Result<(), AdapterError>;
    async fn stop(&self) -> Result<(), AdapterError>;
    async fn reboot(&self) -> Result<(), AdapterError>;
    /// Number of players currently online.
    async fn player_count(&self) -> Result<usize, AdapterError>;
}

// ── Messaging Port ────────────────────────────────────────────────────────────

/// Outbound half of the chat channel.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Send `text` to `chat_id`.
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<()>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts operator feedback so services can report without depending on
/// the chat transport. Sync trait: delivery is fire-and-forget.
pub trait ProgressReporter: Send + Sync {
    /// Emit an informational message (progress, notices, rejections).
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a failure message.
    fn warn(&self, message: &str);
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run a program and capture its output.
    ///
    /// Implementations should delegate to `run_with_timeout` using the
    /// instance's configured default timeout.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
    /// Run a program with a custom timeout override.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds `timeout`.
    /// On timeout, the child process must be killed (not left orphaned).
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output>;
}
