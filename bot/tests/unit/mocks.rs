//! Shared stub infrastructure for unit tests.
//!
//! Provides scripted [`CloudInstances`] and [`GameServer`] implementations
//! that record every call, plus a transcript reporter.

#![allow(clippy::expect_used)]

use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use mcctl_bot::application::ports::{CloudInstances, GameServer, ProgressReporter};
use mcctl_bot::application::Orchestrator;
use mcctl_bot::domain::{AdapterError, InstanceState};

fn scripted_failure(operation: &'static str) -> AdapterError {
    AdapterError::failed(operation, "scripted failure")
}

// ── Stub: cloud instance manager ──────────────────────────────────────────────

/// Answers `state()` from a script; the last entry repeats forever.
/// `None` in the script is a failed query.
pub struct StubCloud {
    states: Mutex<VecDeque<Option<InstanceState>>>,
    failing: HashSet<&'static str>,
    calls: Mutex<Vec<&'static str>>,
}

impl StubCloud {
    pub fn new(states: impl IntoIterator<Item = Option<InstanceState>>) -> Self {
        Self {
            states: Mutex::new(states.into_iter().collect()),
            failing: HashSet::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Always reports `state`.
    pub fn fixed(state: InstanceState) -> Self {
        Self::new([Some(state)])
    }

    /// Make `operation` (`"start"` or `"stop"`) fail.
    pub fn failing(mut self, operation: &'static str) -> Self {
        self.failing.insert(operation);
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().expect("lock").clone()
    }

    fn record(&self, call: &'static str) -> Result<(), AdapterError> {
        self.calls.lock().expect("lock").push(call);
        if self.failing.contains(call) {
            return Err(scripted_failure(call));
        }
        Ok(())
    }
}

#[async_trait]
impl CloudInstances for StubCloud {
    async fn state(&self) -> Result<InstanceState, AdapterError> {
        self.calls.lock().expect("lock").push("state");
        let mut states = self.states.lock().expect("lock");
        let next = if states.len() > 1 {
            states.pop_front().flatten()
        } else {
            states.front().cloned().flatten()
        };
        next.ok_or_else(|| scripted_failure("describe-instances"))
    }

    async fn start(&self) -> Result<(), AdapterError> {
        self.record("start")
    }

    async fn stop(&self) -> Result<(), AdapterError> {
        self.record("stop")
    }
}

// ── Stub: game server control API ─────────────────────────────────────────────

pub struct StubGame {
    players: Option<usize>,
    failing: HashSet<&'static str>,
    latency: Duration,
    calls: Mutex<Vec<&'static str>>,
}

impl StubGame {
    pub fn new() -> Self {
        Self {
            players: Some(0),
            failing: HashSet::new(),
            latency: Duration::ZERO,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_players(mut self, players: Option<usize>) -> Self {
        self.players = players;
        self
    }

    /// Make `operation` (`"start"`, `"stop"` or `"reboot"`) fail.
    pub fn failing(mut self, operation: &'static str) -> Self {
        self.failing.insert(operation);
        self
    }

    /// Every action takes this long to answer.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().expect("lock").clone()
    }

    async fn action(&self, call: &'static str) -> Result<(), AdapterError> {
        self.calls.lock().expect("lock").push(call);
        tokio::time::sleep(self.latency).await;
        if self.failing.contains(call) {
            return Err(scripted_failure(call));
        }
        Ok(())
    }
}

#[async_trait]
impl GameServer for StubGame {
    async fn start(&self) -> Result<(), AdapterError> {
        self.action("start").await
    }

    async fn stop(&self) -> Result<(), AdapterError> {
        self.action("stop").await
    }

    async fn reboot(&self) -> Result<(), AdapterError> {
        self.action("reboot").await
    }

    async fn player_count(&self) -> Result<usize, AdapterError> {
        self.calls.lock().expect("lock").push("players");
        self.players
            .ok_or_else(|| AdapterError::invalid("player list", "scripted failure"))
    }
}

// ── Reporter: transcript ──────────────────────────────────────────────────────

/// Records every message the operator would see, in order.
#[derive(Default)]
pub struct Transcript {
    lines: Mutex<Vec<String>>,
}

impl Transcript {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("lock").clone()
    }

    fn push(&self, message: &str) {
        self.lines.lock().expect("lock").push(message.to_owned());
    }
}

impl ProgressReporter for Transcript {
    fn step(&self, message: &str) {
        self.push(message);
    }

    fn success(&self, message: &str) {
        self.push(message);
    }

    fn warn(&self, message: &str) {
        self.push(message);
    }
}

// ── Wiring ────────────────────────────────────────────────────────────────────

pub fn orchestrator(cloud: &Arc<StubCloud>, game: &Arc<StubGame>) -> Arc<Orchestrator> {
    Arc::new(Orchestrator::new(
        Arc::clone(cloud) as Arc<dyn CloudInstances>,
        Arc::clone(game) as Arc<dyn GameServer>,
    ))
}
