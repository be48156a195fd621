use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::anthropic::AnthropicClient;
use crate::bot::{ChatId, Dispatcher, InboundEvent, Transport};
use crate::conversation::ConversationStore;
use crate::core::CompletionConfig;

// The terminal is a single user in a single chat
const LOCAL_USER: i64 = 0;

/// Prints replies to the terminal.
struct ConsoleTransport;

#[async_trait]
impl Transport for ConsoleTransport {
    async fn send(&self, _chat_id: ChatId, text: &str) -> Result<()> {
        println!("{}\n", text);
        Ok(())
    }
}

pub async fn run() -> Result<()> {
    let config = CompletionConfig::from_env()?;
    let client = Arc::new(AnthropicClient::new(&config)?);
    let dispatcher = Dispatcher::new(
        Arc::new(ConversationStore::new()),
        client,
        Arc::new(ConsoleTransport),
        &config.system_message,
    );

    let mut rl = DefaultEditor::new()?;

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());
                dispatcher
                    .dispatch(InboundEvent::new(LOCAL_USER, LOCAL_USER, &line))
                    .await;
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
