//! Application services: one module per command protocol.
//!
//! Each service is a short linear sequence of port calls that stops at the
//! first failing step. Services import only from `crate::domain` and
//! `crate::application`, never from `crate::infra`, `crate::commands`, or
//! `crate::output`.

pub mod boot;
pub mod reboot;
pub mod shutdown;
pub mod status;

/// Reply for any step that fails without a more specific hint.
pub const GENERIC_FAILURE: &str = "Something went wrong.";
