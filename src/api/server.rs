use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use secrecy::{ExposeSecret, SecretString};
use tower_http::trace::TraceLayer;

use super::routes;
use crate::api::state::AppState;
use crate::bot::Dispatcher;
use crate::telegram::TelegramApi;

pub fn app(shared_state: Arc<AppState>) -> Router {
    Router::new()
        // API routes
        .nest("/api", routes::router())
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for ctrl-c: {}", e);
    }
    tracing::info!("Shutting down");
}

/// Register `webhook_url` with Telegram and serve updates pushed to it
/// until ctrl-c.
pub async fn serve(
    host: String,
    port: String,
    api: Arc<TelegramApi>,
    dispatcher: Dispatcher,
    webhook_url: &str,
    webhook_secret: Option<SecretString>,
) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::debug!("Server started. Listening on {}", listener.local_addr()?);

    api.set_webhook(
        webhook_url,
        webhook_secret.as_ref().map(|s| s.expose_secret()),
    )
    .await?;
    tracing::info!("Registered webhook {}", webhook_url);

    let app_state = AppState::new(dispatcher, webhook_secret);
    let app = app(Arc::new(app_state));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
