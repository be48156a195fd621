use anyhow::Result;
use async_trait::async_trait;

use crate::conversation::UserId;

/// Identity of the chat a reply is delivered to.
pub type ChatId = i64;

/// A text message received from the chat platform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InboundEvent {
    pub user_id: UserId,
    pub chat_id: ChatId,
    pub text: String,
}

impl InboundEvent {
    pub fn new(user_id: UserId, chat_id: ChatId, text: &str) -> Self {
        Self {
            user_id,
            chat_id,
            text: text.to_string(),
        }
    }
}

/// Outbound side of the chat platform.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, chat_id: ChatId, text: &str) -> Result<()>;

    /// Show a "typing..." indicator. Best effort, platforms without one
    /// can leave the default.
    async fn send_typing(&self, _chat_id: ChatId) -> Result<()> {
        Ok(())
    }
}
