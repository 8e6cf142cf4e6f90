//! Presentation layer: turns progress events into chat messages.

pub mod reporter;

pub use reporter::{ChatReporter, Outbox, OutboxHandle};
