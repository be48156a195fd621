use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

use super::models::{History, MAX_HISTORY, Turn, UserId};

/// Exclusive access to one user's history. Held for the whole message
/// pipeline so turns from the same user never interleave.
pub type HistoryGuard = OwnedMutexGuard<History>;

/// Process-wide keyed store of conversation histories.
///
/// Entries are created lazily on first access and live until the
/// process exits. Each user has their own lock so a slow completion
/// for one user never blocks another.
pub struct ConversationStore {
    sessions: DashMap<UserId, Arc<Mutex<History>>>,
    max_history: usize,
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::with_max_history(MAX_HISTORY)
    }

    pub fn with_max_history(max_history: usize) -> Self {
        Self {
            sessions: DashMap::new(),
            max_history,
        }
    }

    fn session(&self, user_id: UserId) -> Arc<Mutex<History>> {
        // Clone the Arc out so the map shard isn't locked while the
        // caller awaits the user's mutex
        self.sessions
            .entry(user_id)
            .or_insert_with(|| Arc::new(Mutex::new(History::with_capacity(self.max_history))))
            .value()
            .clone()
    }

    /// Lock the user's history, creating it if needed.
    pub async fn lock(&self, user_id: UserId) -> HistoryGuard {
        self.session(user_id).lock_owned().await
    }

    /// Snapshot of the user's history, creating an empty one if absent.
    pub async fn get_or_create(&self, user_id: UserId) -> History {
        self.lock(user_id).await.clone()
    }

    pub async fn append(&self, user_id: UserId, turn: Turn) {
        self.lock(user_id).await.push(turn);
    }

    pub async fn clear(&self, user_id: UserId) {
        self.lock(user_id).await.clear();
    }

    /// Number of users with a history in memory.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
