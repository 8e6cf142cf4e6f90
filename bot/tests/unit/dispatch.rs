//! Unit tests for the dispatcher.

#![allow(clippy::expect_used)]

use std::sync::Arc;

use mcctl_bot::commands::{dispatch, help};
use mcctl_bot::domain::InstanceState::Stopped;

use crate::mocks::{StubCloud, StubGame, Transcript, orchestrator};

#[tokio::test]
async fn unknown_command_is_echoed_once() {
    let cloud = Arc::new(StubCloud::fixed(Stopped));
    let game = Arc::new(StubGame::new());
    let out = Transcript::default();

    dispatch(&orchestrator(&cloud, &game), "LaunchNow", &out).await;

    assert_eq!(out.lines(), vec!["LaunchNow is an invalid command."]);
    assert!(cloud.calls().is_empty());
    assert!(game.calls().is_empty());
}

#[tokio::test]
async fn commands_match_case_insensitively() {
    let cloud = Arc::new(StubCloud::fixed(Stopped));
    let game = Arc::new(StubGame::new());
    let out = Transcript::default();

    dispatch(&orchestrator(&cloud, &game), "StAtUs", &out).await;

    assert_eq!(out.lines(), vec!["The server is stopped."]);
}

#[tokio::test]
async fn start_greets() {
    let cloud = Arc::new(StubCloud::fixed(Stopped));
    let game = Arc::new(StubGame::new());
    let out = Transcript::default();

    dispatch(&orchestrator(&cloud, &game), "start", &out).await;

    assert_eq!(out.lines(), vec![help::GREETING]);
    assert!(cloud.calls().is_empty());
}

#[tokio::test]
async fn help_lists_commands() {
    let cloud = Arc::new(StubCloud::fixed(Stopped));
    let game = Arc::new(StubGame::new());
    let out = Transcript::default();

    dispatch(&orchestrator(&cloud, &game), "help", &out).await;

    let lines = out.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("1. /start\n"));
    assert!(lines[0].ends_with("7. /abort"));
}

#[tokio::test(start_paused = true)]
async fn disruptive_commands_run_through_the_gate() {
    let cloud = Arc::new(StubCloud::fixed(Stopped));
    let game = Arc::new(StubGame::new());
    let orch = orchestrator(&cloud, &game);
    let out = Transcript::default();

    dispatch(&orch, "SHUTDOWN", &out).await;

    assert_eq!(
        out.lines(),
        vec![
            "You have 30 seconds to abort this command.",
            "Server is already shut down."
        ]
    );
    assert!(!orch.is_busy());
}
