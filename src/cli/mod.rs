use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod chat;
pub mod poll;
pub mod serve;

use crate::anthropic::AnthropicClient;
use crate::bot::Dispatcher;
use crate::conversation::ConversationStore;
use crate::core::AppConfig;
use crate::telegram::TelegramApi;

#[derive(Subcommand)]
enum Command {
    /// Receive Telegram updates by long polling (the default)
    Poll {},
    /// Receive Telegram updates through a webhook
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "8080")]
        port: String,
    },
    /// Chat with the bot in the terminal
    Chat {},
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=debug,tower_http=debug", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Wire up the Telegram transport, the completion client and a fresh
/// conversation store.
fn telegram_bot(config: &AppConfig) -> Result<(Arc<TelegramApi>, Dispatcher)> {
    let api = Arc::new(TelegramApi::new(&config.telegram)?);
    let client = Arc::new(AnthropicClient::new(&config.completion)?);
    tracing::info!("Using completion model {}", client.model());

    let dispatcher = Dispatcher::new(
        Arc::new(ConversationStore::new()),
        client,
        api.clone(),
        &config.completion.system_message,
    );
    Ok((api, dispatcher))
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();
    init_tracing();

    // Handle each sub command
    match args.command.unwrap_or(Command::Poll {}) {
        Command::Poll {} => {
            poll::run().await?;
        }
        Command::Serve { host, port } => {
            serve::run(host, port).await?;
        }
        Command::Chat {} => {
            chat::run().await?;
        }
    }

    Ok(())
}
