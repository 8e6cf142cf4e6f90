//! Application layer: port trait definitions, the command execution
//! engine, and use-case orchestration.
//!
//! This module depends only on `crate::domain`, never on `crate::infra`,
//! `crate::commands`, or `crate::output`.

pub mod abort_window;
pub mod gate;
pub mod orchestrator;
pub mod poller;
pub mod ports;
pub mod services;

pub use abort_window::{AbortWindow, WindowOutcome};
pub use gate::ExecutionGate;
pub use orchestrator::Orchestrator;
pub use poller::{PollOutcome, poll_until};
pub use ports::{CloudInstances, CommandRunner, GameServer, Messenger, ProgressReporter};
