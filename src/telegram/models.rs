//! Subset of the Telegram Bot API types the bot reads.
use serde::{Deserialize, Serialize};

use crate::bot::InboundEvent;

/// Envelope around every Bot API response.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
    pub error_code: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    #[serde(rename = "type")]
    pub chat_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub from: Option<User>,
    pub chat: Chat,
    pub date: i64,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

impl Update {
    /// The text message carried by this update, if any. Edits, stickers,
    /// photos, channel posts and messages without a sender are skipped.
    pub fn into_event(self) -> Option<InboundEvent> {
        let message = self.message?;
        let user = message.from?;
        let text = message.text?;
        Some(InboundEvent {
            user_id: user.id,
            chat_id: message.chat.id,
            text,
        })
    }
}
