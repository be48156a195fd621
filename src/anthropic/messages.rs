use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::CompletionError;
use crate::conversation::Turn;

/// Something that can generate the next assistant turn for a
/// conversation.
///
/// Implementations do not retry. Whether to try again is up to the
/// caller.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, persona: &str, history: &[Turn]) -> Result<Turn, CompletionError>;
}

// Request body for `POST /v1/messages`. `Turn` already serializes to
// the `{"role": ..., "content": ...}` shape the API expects.
#[derive(Debug, Serialize)]
pub(super) struct MessagesRequest<'a> {
    pub model: &'a str,
    pub max_tokens: u32,
    pub system: &'a str,
    pub messages: &'a [Turn],
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub(super) enum ContentBlock {
    #[serde(rename = "text")]
    Text { text: String },

    // Tool use, thinking, etc. are never requested so skip them
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
pub(super) struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub(super) struct MessagesResponse {
    pub content: Vec<ContentBlock>,
    pub stop_reason: Option<String>,
    pub usage: Option<Usage>,
}

impl MessagesResponse {
    /// All text blocks joined together, or `None` if there were none.
    pub fn text(&self) -> Option<String> {
        let parts: Vec<&str> = self
            .content
            .iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text.as_str()),
                ContentBlock::Other => None,
            })
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.concat())
        }
    }
}

// {"type": "error", "error": {"type": "authentication_error", "message": "invalid x-api-key"}}
#[derive(Debug, Deserialize)]
pub(super) struct ErrorDetail {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct ErrorResponse {
    pub error: ErrorDetail,
}
