//! `ChatReporter`: Presentation-layer implementation of `ProgressReporter`.
//!
//! Messages are queued on an [`Outbox`] whose single task delivers them in
//! submission order. Callers never wait for delivery and never see send
//! failures; those are logged and dropped.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::application::ports::{Messenger, ProgressReporter};

struct Outgoing {
    chat_id: i64,
    text: String,
}

/// Ordered, fire-and-forget delivery of outgoing chat messages.
pub struct Outbox;

/// Cheap handle for queueing messages on a running outbox.
#[derive(Clone)]
pub struct OutboxHandle {
    tx: mpsc::UnboundedSender<Outgoing>,
}

impl Outbox {
    /// Spawn the delivery task. It exits once every handle is dropped and
    /// the queue is drained.
    pub fn spawn(messenger: Arc<dyn Messenger>) -> (OutboxHandle, JoinHandle<()>) {
        let (tx, mut rx) = mpsc::unbounded_channel::<Outgoing>();
        let task = tokio::spawn(async move {
            while let Some(msg) = rx.recv().await {
                if let Err(error) = messenger.send_message(msg.chat_id, &msg.text).await {
                    tracing::warn!(chat_id = msg.chat_id, error = %format!("{error:#}"), "failed to send message");
                }
            }
        });
        (OutboxHandle { tx }, task)
    }
}

impl OutboxHandle {
    /// Queue `text` for `chat_id`.
    pub fn send(&self, chat_id: i64, text: &str) {
        tracing::debug!(chat_id, text, "queueing message");
        let queued = self.tx.send(Outgoing {
            chat_id,
            text: text.to_owned(),
        });
        if queued.is_err() {
            tracing::warn!(chat_id, "outbox closed, message dropped");
        }
    }

    /// Reporter that replies into `chat_id`.
    #[must_use]
    pub fn reporter(&self, chat_id: i64) -> ChatReporter {
        ChatReporter {
            outbox: self.clone(),
            chat_id,
        }
    }
}

/// Progress reporter bound to one chat.
#[derive(Clone)]
pub struct ChatReporter {
    outbox: OutboxHandle,
    chat_id: i64,
}

impl ProgressReporter for ChatReporter {
    fn step(&self, message: &str) {
        self.outbox.send(self.chat_id, message);
    }

    fn success(&self, message: &str) {
        tracing::info!(chat_id = self.chat_id, message, "command succeeded");
        self.outbox.send(self.chat_id, message);
    }

    fn warn(&self, message: &str) {
        tracing::info!(chat_id = self.chat_id, message, "command reported failure");
        self.outbox.send(self.chat_id, message);
    }
}
