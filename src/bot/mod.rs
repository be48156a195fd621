//! Turns inbound chat events into replies.
mod command;
mod dispatcher;
pub mod replies;
mod transport;

pub use command::Intent;
pub use dispatcher::Dispatcher;
pub use transport::{ChatId, InboundEvent, Transport};
