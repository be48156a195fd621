//! Per-user conversation state kept in process memory.
mod models;
mod store;

pub use models::{History, MAX_HISTORY, Role, Turn, UserId};
pub use store::{ConversationStore, HistoryGuard};
