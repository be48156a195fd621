use anyhow::Result;

use crate::core::AppConfig;
use crate::telegram::Poller;

pub async fn run() -> Result<()> {
    let config = AppConfig::from_env()?;
    let (api, dispatcher) = super::telegram_bot(&config)?;
    Poller::new(api, dispatcher).run().await
}
