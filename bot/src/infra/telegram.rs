//! Telegram Bot API client: long-polls `getUpdates` for inbound messages and
//! implements the `Messenger` port with `sendMessage`.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::application::ports::Messenger;

const API_BASE: &str = "https://api.telegram.org";

/// Server-side long-poll duration for `getUpdates`.
pub const LONG_POLL_SECS: u64 = 30;

/// Client-side slack on top of the long-poll so the HTTP timeout never
/// fires before Telegram answers.
const HTTP_TIMEOUT: Duration = Duration::from_secs(LONG_POLL_SECS + 15);

#[derive(Clone)]
pub struct TelegramClient {
    client: Client,
    base_url: String,
}

/// One entry of a `getUpdates` result.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    /// Unix timestamp (seconds) at which the message was sent.
    pub date: i64,
    pub chat: Chat,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

#[derive(Serialize)]
struct GetUpdates {
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<i64>,
    timeout: u64,
    allowed_updates: [&'static str; 1],
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: i64,
    text: &'a str,
}

impl TelegramClient {
    /// Client for the public Bot API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(token: &str) -> Result<Self> {
        Self::with_base_url(&format!("{API_BASE}/bot{token}"))
    }

    /// Client for a Bot API at `base_url` (the part before `/getUpdates`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .context("building Telegram HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Fetch updates newer than `offset`, waiting up to `timeout_secs`
    /// server-side for one to arrive.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an API-level error.
    pub async fn get_updates(&self, offset: Option<i64>, timeout_secs: u64) -> Result<Vec<Update>> {
        self.call(
            "getUpdates",
            &GetUpdates {
                offset,
                timeout: timeout_secs,
                allowed_updates: ["message"],
            },
        )
        .await
    }

    async fn call<B, T>(&self, method: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let resp: ApiResponse<T> = self
            .client
            .post(format!("{}/{method}", self.base_url))
            .json(body)
            .send()
            .await
            .with_context(|| format!("Telegram {method} request failed"))?
            .json()
            .await
            .with_context(|| format!("Telegram {method} returned invalid JSON"))?;

        if !resp.ok {
            anyhow::bail!(
                "Telegram {method} failed: {}",
                resp.description.as_deref().unwrap_or("no description")
            );
        }
        resp.result
            .with_context(|| format!("Telegram {method} returned no result"))
    }
}

#[async_trait]
impl Messenger for TelegramClient {
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<()> {
        let _: serde_json::Value = self
            .call("sendMessage", &SendMessage { chat_id, text })
            .await?;
        Ok(())
    }
}
