use anyhow::Result;

use crate::api;
use crate::core::{AppConfig, ConfigError};

pub async fn run(host: String, port: String) -> Result<()> {
    let config = AppConfig::from_env()?;
    let webhook_url = config
        .telegram
        .webhook_url
        .clone()
        .ok_or(ConfigError::Missing("HOMEOBOT_WEBHOOK_URL"))?;
    let (telegram, dispatcher) = super::telegram_bot(&config)?;

    api::serve(
        host,
        port,
        telegram,
        dispatcher,
        &webhook_url,
        config.telegram.webhook_secret,
    )
    .await
}
