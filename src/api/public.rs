//! Public API types
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// Users with a conversation history in memory
    pub users: usize,
}
