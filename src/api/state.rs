use secrecy::SecretString;

use crate::bot::Dispatcher;

pub struct AppState {
    pub dispatcher: Dispatcher,
    // Expected value of the `X-Telegram-Bot-Api-Secret-Token` header
    pub webhook_secret: Option<SecretString>,
}

impl AppState {
    pub fn new(dispatcher: Dispatcher, webhook_secret: Option<SecretString>) -> Self {
        Self {
            dispatcher,
            webhook_secret,
        }
    }
}
