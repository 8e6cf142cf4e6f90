//! HTTP adapter for the `GameServer` port.
//!
//! The control API is a tiny JSON-over-HTTP service running on the game
//! host: `POST /` with `{"action": ...}` drives the server process and
//! `GET /players` lists who is online.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::application::ports::GameServer;
use crate::domain::AdapterError;

/// Per-request timeout for the control API.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Game server control API client.
#[derive(Clone)]
pub struct HttpGameServer {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct ActionRequest<'a> {
    action: &'a str,
}

#[derive(Deserialize)]
struct PlayerList {
    players: Vec<Player>,
}

#[derive(Deserialize)]
struct Player {
    #[allow(dead_code)] // Validated for shape only
    name: String,
}

impl HttpGameServer {
    /// Create a client for the API at `base_url`, e.g. `http://10.0.0.5:8080`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, AdapterError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AdapterError::failed("client setup", e))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        })
    }

    async fn request_action(&self, action: &'static str) -> Result<(), AdapterError> {
        let resp = self
            .client
            .post(format!("{}/", self.base_url))
            .json(&ActionRequest { action })
            .send()
            .await
            .map_err(|e| AdapterError::failed(action, e))?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(AdapterError::Status {
                operation: action,
                status: status.as_u16(),
            });
        }
        tracing::debug!(action, "game server action accepted");
        Ok(())
    }
}

#[async_trait]
impl GameServer for HttpGameServer {
    async fn start(&self) -> Result<(), AdapterError> {
        self.request_action("start").await
    }

    async fn stop(&self) -> Result<(), AdapterError> {
        self.request_action("stop").await
    }

    async fn reboot(&self) -> Result<(), AdapterError> {
        self.request_action("reboot").await
    }

    async fn player_count(&self) -> Result<usize, AdapterError> {
        const OPERATION: &str = "player list";

        let resp = self
            .client
            .get(format!("{}/players", self.base_url))
            .send()
            .await
            .map_err(|e| AdapterError::failed(OPERATION, e))?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(AdapterError::Status {
                operation: OPERATION,
                status: status.as_u16(),
            });
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| AdapterError::failed(OPERATION, e))?;
        parse_player_count(&body)
    }
}

/// Count the entries of a `{"players": [{"name": ...}, ...]}` document.
///
/// # Errors
///
/// Returns `AdapterError::InvalidData` unless `players` is an array whose
/// every entry is an object with a string `name`.
pub fn parse_player_count(json: &[u8]) -> Result<usize, AdapterError> {
    serde_json::from_slice::<PlayerList>(json)
        .map(|list| list.players.len())
        .map_err(|e| AdapterError::invalid("player list", e))
}
