use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::task::JoinHandle;

use super::api::{TelegramApi, TelegramError};
use super::models::Update;
use crate::bot::Dispatcher;

/// How long each `getUpdates` call waits for new messages.
const POLL_TIMEOUT_SECS: u64 = 30;
/// Pause before polling again after a failed poll.
const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Receives updates via long polling and hands each message to the
/// dispatcher on its own task.
pub struct Poller {
    api: Arc<TelegramApi>,
    dispatcher: Dispatcher,
    offset: Option<i64>,
    timeout_secs: u64,
}

impl Poller {
    pub fn new(api: Arc<TelegramApi>, dispatcher: Dispatcher) -> Self {
        Self {
            api,
            dispatcher,
            offset: None,
            timeout_secs: POLL_TIMEOUT_SECS,
        }
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Offset to acknowledge on the next poll.
    pub fn offset(&self) -> Option<i64> {
        self.offset
    }

    /// Fetch one batch of updates and spawn a handler for every text
    /// message in it.
    pub async fn poll_once(&mut self) -> Result<Vec<JoinHandle<()>>, TelegramError> {
        let updates = self.api.get_updates(self.offset, self.timeout_secs).await?;

        let mut handles = Vec::with_capacity(updates.len());
        for raw in updates {
            // Acknowledge every update, even the ones we skip
            let Some(update_id) = raw.get("update_id").and_then(|id| id.as_i64()) else {
                tracing::warn!("Skipping update without update_id: {}", raw);
                continue;
            };
            self.offset = Some(update_id + 1);

            let update: Update = match serde_json::from_value(raw) {
                Ok(update) => update,
                Err(e) => {
                    tracing::warn!(update_id, "Skipping malformed update: {}", e);
                    continue;
                }
            };
            match update.into_event() {
                Some(event) => handles.push(self.dispatcher.spawn(event)),
                None => tracing::debug!(update_id, "Skipping update without text message"),
            }
        }
        Ok(handles)
    }

    /// Poll until ctrl-c. Poll failures are logged and retried, they
    /// never stop the loop.
    pub async fn run(mut self) -> Result<()> {
        // getUpdates is refused while a webhook is registered
        self.api.delete_webhook().await?;
        tracing::info!("Polling for updates");

        loop {
            let result = tokio::select! {
                _ = tokio::signal::ctrl_c() => break,
                result = self.poll_once() => result,
            };

            if let Err(e) = result {
                tracing::error!("Polling for updates failed: {}", e);
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => break,
                    _ = tokio::time::sleep(RETRY_DELAY) => {}
                }
            }
        }

        tracing::info!("Stopped polling");
        Ok(())
    }
}
