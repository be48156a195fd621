//! Test utilities for integration tests
#![allow(dead_code)]
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use axum::{Router, body::Body};
use secrecy::SecretString;
use tokio::sync::mpsc;

use homeobot::anthropic::{CompletionClient, CompletionError};
use homeobot::api::{AppState, app};
use homeobot::bot::{ChatId, Dispatcher, Transport};
use homeobot::conversation::{ConversationStore, Turn};

/// Replies with the last user message prefixed by `echo: `.
pub struct EchoClient;

#[async_trait]
impl CompletionClient for EchoClient {
    async fn complete(&self, _persona: &str, history: &[Turn]) -> Result<Turn, CompletionError> {
        let last = history
            .last()
            .ok_or_else(|| CompletionError::unknown("empty history"))?;
        Ok(Turn::assistant(&format!("echo: {}", last.content())))
    }
}

/// Forwards every outbound message to a channel the test can read.
pub struct ChannelTransport(mpsc::UnboundedSender<(ChatId, String)>);

#[async_trait]
impl Transport for ChannelTransport {
    async fn send(&self, chat_id: ChatId, text: &str) -> Result<()> {
        self.0.send((chat_id, text.to_string()))?;
        Ok(())
    }
}

pub struct TestBot {
    pub app: Router,
    pub store: Arc<ConversationStore>,
    pub sent: mpsc::UnboundedReceiver<(ChatId, String)>,
}

/// Creates the webhook application backed by an echoing completion
/// client and a transport that records replies.
pub fn test_app(webhook_secret: Option<&str>) -> TestBot {
    let (tx, rx) = mpsc::unbounded_channel();
    let store = Arc::new(ConversationStore::new());
    let dispatcher = Dispatcher::new(
        Arc::clone(&store),
        Arc::new(EchoClient),
        Arc::new(ChannelTransport(tx)),
        "You are a helpful assistant.",
    );
    let secret = webhook_secret.map(|s| SecretString::from(s.to_string()));
    let app_state = AppState::new(dispatcher, secret);

    TestBot {
        app: app(Arc::new(app_state)),
        store,
        sent: rx,
    }
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}

/// A Telegram update carrying a text message.
pub fn text_update(update_id: i64, user_id: i64, text: &str) -> serde_json::Value {
    serde_json::json!({
        "update_id": update_id,
        "message": {
            "message_id": update_id,
            "from": {"id": user_id, "is_bot": false, "first_name": "Test"},
            "chat": {"id": user_id, "type": "private"},
            "date": 1704067200,
            "text": text,
        }
    })
}
