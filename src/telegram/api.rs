//! Minimal Telegram Bot API client for receiving updates and sending
//! replies.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;

use super::models::ApiResponse;
use super::split::{MAX_MESSAGE_LEN, split_message};
use crate::bot::{ChatId, Transport};
use crate::core::TelegramConfig;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum TelegramError {
    #[error("Telegram request failed: {0}")]
    Http(reqwest::Error),

    #[error("Telegram API error {code}: {description}")]
    Api { code: i64, description: String },

    #[error("Telegram response had no result")]
    MissingResult,
}

impl From<reqwest::Error> for TelegramError {
    fn from(e: reqwest::Error) -> Self {
        // The request URL contains the bot token
        Self::Http(e.without_url())
    }
}

pub struct TelegramApi {
    client: Client,
    api_url: String,
    token: SecretString,
}

impl TelegramApi {
    pub fn new(config: &TelegramConfig) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: SecretString::from(config.token.expose_secret().to_string()),
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_url, self.token.expose_secret(), method)
    }

    async fn call<P, T>(
        &self,
        method: &str,
        params: &P,
        timeout: Option<Duration>,
    ) -> Result<T, TelegramError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self.client.post(self.method_url(method)).json(params);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        // Error responses still use the JSON envelope so don't bail on
        // the status code
        let resp: ApiResponse<T> = request.send().await?.json().await?;
        if !resp.ok {
            return Err(TelegramError::Api {
                code: resp.error_code.unwrap_or_default(),
                description: resp.description.unwrap_or_default(),
            });
        }
        resp.result.ok_or(TelegramError::MissingResult)
    }

    /// Long poll for new message updates. Blocks for up to `timeout_secs`
    /// when there is nothing new. Updates come back undecoded so one
    /// malformed entry can't fail the whole batch.
    pub async fn get_updates(
        &self,
        offset: Option<i64>,
        timeout_secs: u64,
    ) -> Result<Vec<serde_json::Value>, TelegramError> {
        let mut params = json!({
            "timeout": timeout_secs,
            "allowed_updates": ["message"],
        });
        if let Some(offset) = offset {
            params["offset"] = json!(offset);
        }
        // Give the server a little longer than the poll itself
        let timeout = Duration::from_secs(timeout_secs) + REQUEST_TIMEOUT;
        self.call("getUpdates", &params, Some(timeout)).await
    }

    pub async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<(), TelegramError> {
        let params = json!({"chat_id": chat_id, "text": text});
        let _: serde_json::Value = self.call("sendMessage", &params, None).await?;
        Ok(())
    }

    pub async fn send_chat_action(
        &self,
        chat_id: ChatId,
        action: &str,
    ) -> Result<(), TelegramError> {
        let params = json!({"chat_id": chat_id, "action": action});
        let _: bool = self.call("sendChatAction", &params, None).await?;
        Ok(())
    }

    pub async fn set_webhook(&self, url: &str, secret: Option<&str>) -> Result<(), TelegramError> {
        let mut params = json!({"url": url, "allowed_updates": ["message"]});
        if let Some(secret) = secret {
            params["secret_token"] = json!(secret);
        }
        let _: bool = self.call("setWebhook", &params, None).await?;
        Ok(())
    }

    pub async fn delete_webhook(&self) -> Result<(), TelegramError> {
        let _: bool = self.call("deleteWebhook", &json!({}), None).await?;
        Ok(())
    }
}

#[async_trait]
impl Transport for TelegramApi {
    async fn send(&self, chat_id: ChatId, text: &str) -> Result<()> {
        let chunks = split_message(text, MAX_MESSAGE_LEN);
        if chunks.is_empty() {
            tracing::warn!(chat_id, "Skipping empty message");
        }
        for chunk in chunks {
            self.send_message(chat_id, &chunk).await?;
        }
        Ok(())
    }

    async fn send_typing(&self, chat_id: ChatId) -> Result<()> {
        self.send_chat_action(chat_id, "typing").await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;

    use super::*;

    const TOKEN: &str = "123:abc";

    fn test_api(url: &str) -> TelegramApi {
        TelegramApi::new(&TelegramConfig {
            token: SecretString::from(TOKEN.to_string()),
            api_url: url.to_string(),
            webhook_url: None,
            webhook_secret: None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_get_updates() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/bot123:abc/getUpdates")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "offset": 7,
                "timeout": 0,
                "allowed_updates": ["message"]
            })))
            .with_status(200)
            .with_body(
                r#"{"ok": true, "result": [{
                    "update_id": 7,
                    "message": {
                        "message_id": 1,
                        "from": {"id": 42, "is_bot": false, "first_name": "Anna"},
                        "chat": {"id": 4242, "type": "private"},
                        "date": 1704067200,
                        "text": "Hello"
                    }
                }]}"#,
            )
            .create_async()
            .await;

        let api = test_api(&server.url());
        let updates = api.get_updates(Some(7), 0).await.unwrap();

        mock.assert_async().await;
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0]["update_id"], 7);
    }

    #[tokio::test]
    async fn test_api_error_surfaces_description() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("POST", "/bot123:abc/sendMessage")
            .with_status(400)
            .with_body(
                r#"{"ok": false, "error_code": 400, "description": "Bad Request: chat not found"}"#,
            )
            .create_async()
            .await;

        let api = test_api(&server.url());
        let err = api.send_message(1, "hi").await.unwrap_err();
        match err {
            TelegramError::Api { code, description } => {
                assert_eq!(code, 400);
                assert_eq!(description, "Bad Request: chat not found");
            }
            other => panic!("Unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_send_splits_long_text() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/bot123:abc/sendMessage")
            .match_body(Matcher::PartialJson(serde_json::json!({"chat_id": 5})))
            .with_status(200)
            .with_body(r#"{"ok": true, "result": {"message_id": 1}}"#)
            .expect(2)
            .create_async()
            .await;

        let api = test_api(&server.url());
        let text = "a".repeat(MAX_MESSAGE_LEN + 1);
        Transport::send(&api, 5, &text).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_send_typing() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/bot123:abc/sendChatAction")
            .match_body(Matcher::Json(serde_json::json!({"chat_id": 5, "action": "typing"})))
            .with_status(200)
            .with_body(r#"{"ok": true, "result": true}"#)
            .create_async()
            .await;

        let api = test_api(&server.url());
        api.send_typing(5).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_http_errors_do_not_leak_token() {
        let api = test_api("http://127.0.0.1:1");
        let err = api.delete_webhook().await.unwrap_err();
        assert!(matches!(err, TelegramError::Http(_)));
        assert!(!err.to_string().contains(TOKEN));
    }
}
