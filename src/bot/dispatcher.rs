use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use anyhow::Result;
use futures::FutureExt;
use tokio::task::JoinHandle;

use super::command::Intent;
use super::replies;
use super::transport::{InboundEvent, Transport};
use crate::anthropic::{CompletionClient, CompletionErrorKind};
use crate::conversation::{ConversationStore, Turn};

/// Routes inbound chat events to the right handler and runs the
/// completion pipeline for plain messages.
///
/// Cheap to clone, every field is shared.
#[derive(Clone)]
pub struct Dispatcher {
    store: Arc<ConversationStore>,
    client: Arc<dyn CompletionClient>,
    transport: Arc<dyn Transport>,
    persona: Arc<str>,
}

impl Dispatcher {
    pub fn new(
        store: Arc<ConversationStore>,
        client: Arc<dyn CompletionClient>,
        transport: Arc<dyn Transport>,
        persona: &str,
    ) -> Self {
        Self {
            store,
            client,
            transport,
            persona: Arc::from(persona),
        }
    }

    pub fn store(&self) -> &Arc<ConversationStore> {
        &self.store
    }

    /// Handle the event on its own task so slow completions for one
    /// user don't hold up anybody else.
    pub fn spawn(&self, event: InboundEvent) -> JoinHandle<()> {
        let dispatcher = self.clone();
        tokio::spawn(async move { dispatcher.dispatch(event).await })
    }

    /// Handle a single event. Never fails: errors and panics are logged
    /// here so one bad event can't take down the event loop.
    pub async fn dispatch(&self, event: InboundEvent) {
        let user_id = event.user_id;
        let intent = Intent::parse(&event.text);
        let is_message = matches!(intent, Intent::Message(_));

        match AssertUnwindSafe(self.handle(&event, intent)).catch_unwind().await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                tracing::error!(
                    user_id,
                    chat_id = event.chat_id,
                    "Failed to handle event: {:#}",
                    e
                );
            }
            Err(panic) => {
                let reason = panic
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| panic.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| String::from("unknown panic"));
                tracing::error!(
                    user_id,
                    chat_id = event.chat_id,
                    "Event handler panicked: {}",
                    reason
                );

                // The user is still waiting on an answer
                if is_message {
                    let text = replies::completion_failed(CompletionErrorKind::Unknown);
                    if let Err(e) = self.transport.send(event.chat_id, text).await {
                        tracing::error!(
                            user_id,
                            chat_id = event.chat_id,
                            "Failed to report handler panic: {:#}",
                            e
                        );
                    }
                }
            }
        }
    }

    async fn handle(&self, event: &InboundEvent, intent: Intent) -> Result<()> {
        match intent {
            Intent::Welcome => self.transport.send(event.chat_id, replies::WELCOME).await,
            Intent::Help => self.transport.send(event.chat_id, replies::HELP).await,
            Intent::ClearHistory => {
                self.store.clear(event.user_id).await;
                tracing::debug!(user_id = event.user_id, "Cleared conversation history");
                self.transport
                    .send(event.chat_id, replies::HISTORY_CLEARED)
                    .await
            }
            Intent::Message(text) => self.handle_message(event, &text).await,
            Intent::Unrecognized(command) => {
                tracing::debug!(user_id = event.user_id, "Ignoring unknown command /{}", command);
                Ok(())
            }
            Intent::Empty => Ok(()),
        }
    }

    async fn handle_message(&self, event: &InboundEvent, text: &str) -> Result<()> {
        if let Err(e) = self.transport.send_typing(event.chat_id).await {
            tracing::warn!(chat_id = event.chat_id, "Failed to send typing indicator: {:#}", e);
        }

        // Held until the reply is recorded so a second message from the
        // same user waits for this one to finish
        let mut history = self.store.lock(event.user_id).await;
        history.push(Turn::user(text));

        let result = self.client.complete(&self.persona, &history.turns()).await;

        let reply = match result {
            Ok(turn) => {
                history.push(turn.clone());
                tracing::debug!(
                    user_id = event.user_id,
                    history_len = history.len(),
                    "Recorded assistant reply"
                );
                turn.content().to_string()
            }
            Err(e) => {
                tracing::error!(
                    user_id = event.user_id,
                    kind = ?e.kind(),
                    "Completion failed: {}",
                    e
                );
                replies::completion_failed(e.kind()).to_string()
            }
        };
        drop(history);

        self.transport.send(event.chat_id, &reply).await
    }
}
