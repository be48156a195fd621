//! Client for the Anthropic Messages API.
//!
//! Sends the persona as the system prompt along with the conversation
//! turns and returns the generated reply as a single assistant turn.

use std::time::Instant;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};

use super::error::CompletionError;
use super::messages::{CompletionClient, ErrorResponse, MessagesRequest, MessagesResponse};
use crate::conversation::Turn;
use crate::core::CompletionConfig;

const API_VERSION: &str = "2023-06-01";

pub struct AnthropicClient {
    client: Client,
    api_key: SecretString,
    url: String,
    model: String,
    max_tokens: u32,
}

impl AnthropicClient {
    pub fn new(config: &CompletionConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        let url = format!("{}/v1/messages", config.api_url.trim_end_matches('/'));

        Ok(Self {
            client,
            api_key: SecretString::from(config.api_key.expose_secret().to_string()),
            url,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn classify_error(status: StatusCode, body: &str) -> CompletionError {
        // Prefer the API's own description, fall back to the raw body
        let message = match serde_json::from_str::<ErrorResponse>(body) {
            Ok(resp) => format!("{}: {}", resp.error.error_type, resp.error.message),
            Err(_) if body.trim().is_empty() => status.to_string(),
            Err(_) => body.to_string(),
        };
        CompletionError::remote_api(status.as_u16(), message)
    }
}

#[async_trait]
impl CompletionClient for AnthropicClient {
    async fn complete(&self, persona: &str, history: &[Turn]) -> Result<Turn, CompletionError> {
        let payload = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            system: persona,
            messages: history,
        };

        let start = Instant::now();
        let response = self
            .client
            .post(&self.url)
            .header("x-api-key", self.api_key.expose_secret())
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err = Self::classify_error(status, &body);
            tracing::warn!(
                model = %self.model,
                duration_ms = %start.elapsed().as_millis(),
                status = status.as_u16(),
                "Completion request rejected"
            );
            return Err(err);
        }

        let resp: MessagesResponse = serde_json::from_str(&body)
            .map_err(|e| CompletionError::unknown(format!("failed to parse response: {}", e)))?;

        let text = resp
            .text()
            .ok_or_else(|| CompletionError::unknown("response contained no text content"))?;

        if let Some(usage) = &resp.usage {
            tracing::info!(
                model = %self.model,
                duration_ms = %start.elapsed().as_millis(),
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                stop_reason = resp.stop_reason.as_deref().unwrap_or("unknown"),
                "Completion request finished"
            );
        }

        Ok(Turn::assistant(&text))
    }
}
