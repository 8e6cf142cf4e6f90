//! Domain layer: pure types, parsing, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod command;
pub mod config;
pub mod error;
pub mod instance;
pub mod message;

pub use command::{Command, UnknownCommand};
pub use config::BotConfig;
pub use error::{AdapterError, GateBusy, StepContext, StepFailure};
pub use instance::InstanceState;
pub use message::{MAX_MESSAGE_AGE_SECS, extract_command, is_stale};
