//! Unit tests for `/status`.

#![allow(clippy::expect_used)]

use std::sync::Arc;

use mcctl_bot::domain::InstanceState::{Running, Stopped};

use crate::mocks::{StubCloud, StubGame, Transcript, orchestrator};

#[tokio::test]
async fn status_running_includes_player_count() {
    let cloud = Arc::new(StubCloud::fixed(Running));
    let game = Arc::new(StubGame::new().with_players(Some(2)));
    let out = Transcript::default();

    orchestrator(&cloud, &game).status(&out).await;

    assert_eq!(
        out.lines(),
        vec!["The server is running. There is/are 2 player(s) online."]
    );
}

#[tokio::test]
async fn status_running_with_failed_player_count_omits_clause() {
    let cloud = Arc::new(StubCloud::fixed(Running));
    let game = Arc::new(StubGame::new().with_players(None));
    let out = Transcript::default();

    orchestrator(&cloud, &game).status(&out).await;

    assert_eq!(out.lines(), vec!["The server is running."]);
    assert_eq!(game.calls(), vec!["players"]);
}

#[tokio::test]
async fn status_stopped_does_not_query_players() {
    let cloud = Arc::new(StubCloud::fixed(Stopped));
    let game = Arc::new(StubGame::new());
    let out = Transcript::default();

    orchestrator(&cloud, &game).status(&out).await;

    assert_eq!(out.lines(), vec!["The server is stopped."]);
    assert!(game.calls().is_empty());
}

#[tokio::test]
async fn status_state_failure_is_reported_then_summarised() {
    let cloud = Arc::new(StubCloud::new([None]));
    let game = Arc::new(StubGame::new());
    let out = Transcript::default();

    orchestrator(&cloud, &game).status(&out).await;

    assert_eq!(
        out.lines(),
        vec![
            "Failed to retrieve server status.",
            "The server is in an unknown state."
        ]
    );
    assert!(game.calls().is_empty());
}

#[tokio::test]
async fn status_does_not_touch_the_gate() {
    let cloud = Arc::new(StubCloud::fixed(Running));
    let game = Arc::new(StubGame::new());
    let orch = orchestrator(&cloud, &game);

    orch.status(&Transcript::default()).await;

    assert!(!orch.is_busy());
}
