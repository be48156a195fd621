//! Router for the webhook API

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};
use http::{HeaderMap, StatusCode};
use secrecy::ExposeSecret;

use crate::api::state::AppState;
use crate::telegram::Update;

type SharedState = Arc<AppState>;

/// Header Telegram uses to echo back the secret set with `setWebhook`.
pub const SECRET_TOKEN_HEADER: &str = "x-telegram-bot-api-secret-token";

/// Receive an update pushed by Telegram. Replies happen on a separate
/// task so Telegram gets its 200 right away and doesn't redeliver.
async fn telegram_webhook(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(update): Json<Update>,
) -> StatusCode {
    if let Some(secret) = &state.webhook_secret {
        let provided = headers
            .get(SECRET_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok());
        if provided != Some(secret.expose_secret()) {
            tracing::warn!(update_id = update.update_id, "Rejected webhook call with bad secret");
            return StatusCode::UNAUTHORIZED;
        }
    }

    let update_id = update.update_id;
    match update.into_event() {
        Some(event) => {
            state.dispatcher.spawn(event);
        }
        None => tracing::debug!(update_id, "Skipping update without text message"),
    }
    StatusCode::OK
}

/// Create the webhook router
pub fn router() -> Router<SharedState> {
    Router::new().route("/telegram", post(telegram_webhook))
}
