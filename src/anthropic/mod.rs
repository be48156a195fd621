mod client;
mod error;
mod messages;
mod prompt;

pub use client::AnthropicClient;
pub use error::{CompletionError, CompletionErrorKind};
pub use messages::CompletionClient;
pub use prompt::SYSTEM_PROMPT;
