//! Status: report instance state and, when running, the player count.

use std::fmt;

use crate::application::ports::{CloudInstances, GameServer};
use crate::domain::InstanceState;

/// Reply when the instance state cannot be read.
pub const STATUS_UNAVAILABLE: &str = "Failed to retrieve server status.";

/// What `/status` found out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    /// `None` if the state query failed.
    pub state: Option<InstanceState>,
    /// `None` unless the instance is running and the count query succeeded.
    pub players: Option<usize>,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            Some(state) => write!(f, "The server is {state}.")?,
            None => f.write_str("The server is in an unknown state.")?,
        }
        if let Some(n) = self.players {
            write!(f, " There is/are {n} player(s) online.")?;
        }
        Ok(())
    }
}

/// Gather a status report. Never fails: a failed state query yields
/// `state: None`, a failed player count is left out.
pub async fn status(cloud: &dyn CloudInstances, game: &dyn GameServer) -> StatusReport {
    let state = match cloud.state().await {
        Ok(state) => Some(state),
        Err(error) => {
            tracing::warn!(%error, "instance state query failed");
            None
        }
    };

    let players = if state == Some(InstanceState::Running) {
        match game.player_count().await {
            Ok(n) => Some(n),
            Err(error) => {
                tracing::debug!(%error, "player count unavailable");
                None
            }
        }
    } else {
        None
    };

    StatusReport { state, players }
}
