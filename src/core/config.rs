use std::env;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

use crate::anthropic::SYSTEM_PROMPT;

pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-sonnet-4-5-20250929";
pub const DEFAULT_ANTHROPIC_MAX_TOKENS: u32 = 2000;
pub const DEFAULT_ANTHROPIC_API_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Startup configuration problems. These are fatal, the bot never
/// enters its event loop with a broken config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing env var {0}")]
    Missing(&'static str),

    #[error("Invalid value for env var {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

// Treat empty values the same as unset ones
fn lookup<F>(vars: &F, name: &'static str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    vars(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn required<F>(vars: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(vars, name).ok_or(ConfigError::Missing(name))
}

fn parsed<F, T>(vars: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(vars, name) {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { var: name, value }),
        None => Ok(default),
    }
}

fn process_env(name: &str) -> Option<String> {
    env::var(name).ok()
}

/// Settings for talking to the completion API.
#[derive(Debug)]
pub struct CompletionConfig {
    pub api_key: SecretString,
    pub api_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub timeout: Duration,
    pub system_message: String,
}

impl CompletionConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(process_env)
    }

    pub fn from_vars<F>(vars: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = SecretString::from(required(&vars, "ANTHROPIC_API_KEY")?);
        let api_url = lookup(&vars, "ANTHROPIC_API_URL")
            .unwrap_or_else(|| DEFAULT_ANTHROPIC_API_URL.to_string());
        let model = lookup(&vars, "ANTHROPIC_MODEL")
            .unwrap_or_else(|| DEFAULT_ANTHROPIC_MODEL.to_string());
        let max_tokens = parsed(&vars, "ANTHROPIC_MAX_TOKENS", DEFAULT_ANTHROPIC_MAX_TOKENS)?;
        let timeout_secs = parsed(
            &vars,
            "HOMEOBOT_REQUEST_TIMEOUT_SECS",
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?;
        let system_message =
            lookup(&vars, "HOMEOBOT_SYSTEM_MESSAGE").unwrap_or_else(|| SYSTEM_PROMPT.to_string());

        Ok(Self {
            api_key,
            api_url,
            model,
            max_tokens,
            timeout: Duration::from_secs(timeout_secs),
            system_message,
        })
    }
}

/// Settings for the Telegram Bot API.
#[derive(Debug)]
pub struct TelegramConfig {
    pub token: SecretString,
    pub api_url: String,
    pub webhook_url: Option<String>,
    pub webhook_secret: Option<SecretString>,
}

impl TelegramConfig {
    pub fn from_vars<F>(vars: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = SecretString::from(required(&vars, "TELEGRAM_TOKEN")?);
        let api_url = lookup(&vars, "TELEGRAM_API_URL")
            .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string());
        let webhook_url = lookup(&vars, "HOMEOBOT_WEBHOOK_URL");
        let webhook_secret = lookup(&vars, "HOMEOBOT_WEBHOOK_SECRET").map(SecretString::from);

        Ok(Self {
            token,
            api_url,
            webhook_url,
            webhook_secret,
        })
    }
}

#[derive(Debug)]
pub struct AppConfig {
    pub telegram: TelegramConfig,
    pub completion: CompletionConfig,
}

impl AppConfig {
    /// Load the full bot configuration. Both the Telegram token and the
    /// completion API key are required.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(process_env)
    }

    pub fn from_vars<F>(vars: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            telegram: TelegramConfig::from_vars(&vars)?,
            completion: CompletionConfig::from_vars(&vars)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_vars(vars(&[
            ("TELEGRAM_TOKEN", "123:abc"),
            ("ANTHROPIC_API_KEY", "sk-ant-test"),
        ]))
        .unwrap();

        assert_eq!(config.telegram.token.expose_secret(), "123:abc");
        assert_eq!(config.telegram.api_url, DEFAULT_TELEGRAM_API_URL);
        assert!(config.telegram.webhook_url.is_none());
        assert_eq!(config.completion.api_key.expose_secret(), "sk-ant-test");
        assert_eq!(config.completion.model, DEFAULT_ANTHROPIC_MODEL);
        assert_eq!(config.completion.max_tokens, 2000);
        assert_eq!(config.completion.timeout, Duration::from_secs(120));
        assert_eq!(config.completion.system_message, SYSTEM_PROMPT);
    }

    #[test]
    fn test_missing_telegram_token() {
        let err = AppConfig::from_vars(vars(&[("ANTHROPIC_API_KEY", "sk-ant-test")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("TELEGRAM_TOKEN")));
    }

    #[test]
    fn test_empty_api_key_is_missing() {
        let err = AppConfig::from_vars(vars(&[
            ("TELEGRAM_TOKEN", "123:abc"),
            ("ANTHROPIC_API_KEY", "  "),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Missing("ANTHROPIC_API_KEY")));
    }

    #[test]
    fn test_invalid_max_tokens() {
        let err = CompletionConfig::from_vars(vars(&[
            ("ANTHROPIC_API_KEY", "sk-ant-test"),
            ("ANTHROPIC_MAX_TOKENS", "lots"),
        ]))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for env var ANTHROPIC_MAX_TOKENS: \"lots\""
        );
    }

    #[test]
    fn test_secrets_are_not_debug_printed() {
        let config = CompletionConfig::from_vars(vars(&[("ANTHROPIC_API_KEY", "sk-ant-secret")]))
            .unwrap();
        assert!(!format!("{:?}", config).contains("sk-ant-secret"));
    }
}
