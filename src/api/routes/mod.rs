//! API routes module

pub mod webhook;

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};

use crate::api::public::HealthResponse;
use crate::api::state::AppState;

type SharedState = Arc<AppState>;

async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
        users: state.dispatcher.store().len(),
    })
}

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/health", get(health))
        // Webhook routes
        .nest("/webhook", webhook::router())
}
