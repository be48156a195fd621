pub mod config;
pub use config::{AppConfig, CompletionConfig, ConfigError, TelegramConfig};
