//! Unit tests for the `/reboot` protocol.

#![allow(clippy::expect_used)]

use std::sync::Arc;

use mcctl_bot::domain::InstanceState::{Pending, Running, Stopped};

use crate::mocks::{StubCloud, StubGame, Transcript, orchestrator};

const GRACE_NOTICE: &str = "You have 30 seconds to abort this command.";
const NOT_RUNNING: &str = "Failed to reboot the server as it is not running.";

#[tokio::test(start_paused = true)]
async fn reboot_running_server() {
    let cloud = Arc::new(StubCloud::fixed(Running));
    let game = Arc::new(StubGame::new());
    let out = Transcript::default();

    orchestrator(&cloud, &game).reboot(&out).await;

    assert_eq!(
        out.lines(),
        vec![GRACE_NOTICE, "Server is rebooting.", "Successfully rebooted."]
    );
    assert_eq!(cloud.calls(), vec!["state"], "state is not re-checked after reboot");
    assert_eq!(game.calls(), vec!["reboot"]);
}

#[tokio::test(start_paused = true)]
async fn reboot_requires_running_instance() {
    for state in [Stopped, Pending] {
        let cloud = Arc::new(StubCloud::fixed(state));
        let game = Arc::new(StubGame::new());
        let out = Transcript::default();

        orchestrator(&cloud, &game).reboot(&out).await;

        assert_eq!(out.lines(), vec![GRACE_NOTICE, NOT_RUNNING]);
        assert!(game.calls().is_empty());
    }
}

#[tokio::test(start_paused = true)]
async fn reboot_failure_is_reported() {
    let cloud = Arc::new(StubCloud::fixed(Running));
    let game = Arc::new(StubGame::new().failing("reboot"));
    let out = Transcript::default();

    let orch = orchestrator(&cloud, &game);
    orch.reboot(&out).await;

    assert_eq!(
        out.lines(),
        vec![GRACE_NOTICE, "Server is rebooting.", "Something went wrong."]
    );
    assert!(!orch.is_busy());
}
