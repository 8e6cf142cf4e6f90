//! Deadline poller: query external state on a fixed interval until a target
//! condition holds or an overall deadline passes.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior};

/// How a poll ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    Satisfied,
    TimedOut,
}

/// Call `probe` every `interval` until it yields `Ok(true)` or `timeout`
/// elapses.
///
/// The first probe runs one `interval` after the call. A probe error counts
/// as "not yet" and is logged. The deadline covers in-flight probes too: a
/// probe that hangs past it is dropped and the poll resolves `TimedOut`.
/// Nothing keeps running after this future resolves.
pub async fn poll_until<F, Fut, E>(mut probe: F, interval: Duration, timeout: Duration) -> PollOutcome
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool, E>>,
    E: Display,
{
    let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let polling = async {
        let mut attempt: u32 = 0;
        loop {
            ticker.tick().await;
            attempt += 1;
            match probe().await {
                Ok(true) => return,
                Ok(false) => tracing::debug!(attempt, "condition not met yet"),
                Err(error) => tracing::warn!(attempt, %error, "poll probe failed"),
            }
        }
    };

    match tokio::time::timeout(timeout, polling).await {
        Ok(()) => PollOutcome::Satisfied,
        Err(_) => PollOutcome::TimedOut,
    }
}
