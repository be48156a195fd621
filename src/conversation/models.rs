//! The core models for a bounded conversation with the completion model.
use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Maximum number of turns replayed to the completion API per user.
pub const MAX_HISTORY: usize = 10;

/// Identity of the chat user that owns a history.
pub type UserId = i64;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
}

/// One message exchanged in a conversation. Fields are private so a
/// turn can't be changed once it's been recorded.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Turn {
    role: Role,
    content: String,
}

impl Turn {
    pub fn new(role: Role, content: &str) -> Self {
        Self {
            role,
            content: content.to_string(),
        }
    }

    pub fn user(content: &str) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: &str) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Ordered turns for a single user, oldest first. Never holds more
/// than `capacity` turns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct History {
    turns: VecDeque<Turn>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(MAX_HISTORY)
    }
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            turns: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a turn, dropping the oldest turns until the history fits
    /// its capacity again.
    pub fn push(&mut self, turn: Turn) {
        self.turns.push_back(turn);
        while self.turns.len() > self.capacity {
            self.turns.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, Turn> {
        self.turns.iter()
    }

    /// Copy of the turns in replay order.
    pub fn turns(&self) -> Vec<Turn> {
        self.turns.iter().cloned().collect()
    }
}
