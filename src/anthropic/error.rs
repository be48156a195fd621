//! Completion error types

use thiserror::Error;

/// Why a completion request failed. Callers pick the user facing
/// message from this, never from the diagnostic text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionErrorKind {
    /// The API answered with an error status
    RemoteApi,
    /// The API could not be reached (connect, timeout, broken body)
    Transport,
    /// Anything else, e.g. a response we can't make sense of
    Unknown,
}

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion API returned HTTP {status}: {message}")]
    RemoteApi { status: u16, message: String },

    #[error("failed to reach completion API: {0}")]
    Transport(String),

    #[error("completion failed: {0}")]
    Unknown(String),
}

impl CompletionError {
    pub fn remote_api(status: u16, message: impl Into<String>) -> Self {
        Self::RemoteApi {
            status,
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown(message.into())
    }

    pub fn kind(&self) -> CompletionErrorKind {
        match self {
            Self::RemoteApi { .. } => CompletionErrorKind::RemoteApi,
            Self::Transport(_) => CompletionErrorKind::Transport,
            Self::Unknown(_) => CompletionErrorKind::Unknown,
        }
    }
}

impl From<reqwest::Error> for CompletionError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::transport(format!("request timeout: {}", e))
        } else if e.is_connect() || e.is_request() || e.is_body() {
            Self::transport(format!("connection failed: {}", e))
        } else if let Some(status) = e.status() {
            Self::remote_api(status.as_u16(), e.to_string())
        } else {
            Self::unknown(format!("request failed: {}", e))
        }
    }
}
