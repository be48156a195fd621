//! Telegram Bot API transport.
mod api;
pub mod models;
mod polling;
mod split;

pub use api::{TelegramApi, TelegramError};
pub use models::Update;
pub use polling::Poller;
pub use split::{MAX_MESSAGE_LEN, split_message};
