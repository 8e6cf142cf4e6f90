//! Application context: wires adapters to the orchestrator and runs the
//! Telegram receive loop.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::task::JoinHandle;

use crate::application::Orchestrator;
use crate::commands;
use crate::domain::{BotConfig, extract_command, is_stale};
use crate::infra::ec2::AwsCliInstances;
use crate::infra::game_server::HttpGameServer;
use crate::infra::telegram::{LONG_POLL_SECS, TelegramClient, Update};
use crate::output::{Outbox, OutboxHandle};

/// Pause before retrying after `getUpdates` fails.
const RECEIVE_BACKOFF: Duration = Duration::from_secs(5);

/// How long queued replies may take to flush at shutdown.
const OUTBOX_DRAIN: Duration = Duration::from_secs(5);

/// Everything the running bot needs.
pub struct App {
    orchestrator: Arc<Orchestrator>,
    telegram: TelegramClient,
    outbox: OutboxHandle,
    outbox_task: JoinHandle<()>,
}

impl App {
    /// Build production adapters from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be built.
    pub fn new(config: &BotConfig) -> Result<Self> {
        let cloud = Arc::new(AwsCliInstances::from_config(config));
        let game = Arc::new(
            HttpGameServer::new(config.game_server_url()).context("building game server client")?,
        );
        let telegram = TelegramClient::new(&config.telegram_token)?;
        Ok(Self::from_parts(
            Arc::new(Orchestrator::new(cloud, game)),
            telegram,
        ))
    }

    /// Assemble an app from an existing orchestrator and Bot API client.
    ///
    /// Spawns the outbox task, so this must be called inside a runtime.
    #[must_use]
    pub fn from_parts(orchestrator: Arc<Orchestrator>, telegram: TelegramClient) -> Self {
        let (outbox, outbox_task) = Outbox::spawn(Arc::new(telegram.clone()));
        Self {
            orchestrator,
            telegram,
            outbox,
            outbox_task,
        }
    }

    /// Receive and dispatch messages until `shutdown` resolves.
    ///
    /// Each command runs on its own task so `/abort` and `/status` are
    /// handled while a long command holds the gate. Commands still running
    /// at shutdown are dropped.
    ///
    /// # Errors
    ///
    /// Currently infallible; receive errors are logged and retried.
    pub async fn run(self, shutdown: impl Future<Output = ()>) -> Result<()> {
        tokio::pin!(shutdown);
        let mut offset: Option<i64> = None;

        loop {
            let updates = tokio::select! {
                () = &mut shutdown => break,
                res = self.telegram.get_updates(offset, LONG_POLL_SECS) => res,
            };

            match updates {
                Ok(updates) => {
                    for update in updates {
                        offset = Some(update.update_id + 1);
                        self.accept(update);
                    }
                }
                Err(error) => {
                    tracing::warn!(error = %format!("{error:#}"), "getUpdates failed, retrying");
                    tokio::select! {
                        () = &mut shutdown => break,
                        () = tokio::time::sleep(RECEIVE_BACKOFF) => {}
                    }
                }
            }
        }

        tracing::info!(busy = self.orchestrator.is_busy(), "receive loop stopped");
        drop(self.outbox);
        if tokio::time::timeout(OUTBOX_DRAIN, self.outbox_task).await.is_err() {
            tracing::warn!("outbox still busy at shutdown, pending messages dropped");
        }
        Ok(())
    }

    /// Filter one update and spawn its command.
    fn accept(&self, update: Update) {
        let Some(message) = update.message else {
            return;
        };
        let Some(command) = message.text.as_deref().and_then(extract_command) else {
            return;
        };
        let chat_id = message.chat.id;

        if is_stale(message.date, chrono::Utc::now().timestamp()) {
            tracing::debug!(chat_id, command, sent_at = message.date, "dropping stale message");
            return;
        }

        let command = command.to_owned();
        let orchestrator = Arc::clone(&self.orchestrator);
        let reporter = self.outbox.reporter(chat_id);
        tokio::spawn(async move {
            commands::dispatch(&orchestrator, &command, &reporter).await;
        });
    }
}
