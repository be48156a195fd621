//! Telegram relay that answers questions on classical homeopathy using
//! the Anthropic Messages API, with a short per-user conversation
//! memory.
pub mod anthropic;
pub mod api;
pub mod bot;
pub mod cli;
pub mod conversation;
pub mod core;
pub mod telegram;
