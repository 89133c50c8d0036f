//! Error handling for the Lagos Property Map client

use thiserror::Error;

/// Unified error type for the Lagos Property Map client.
///
/// Transport-library errors are normalized into this closed taxonomy at the
/// dispatcher boundary; no downstream code inspects `reqwest` error shapes.
#[derive(Error, Debug)]
pub enum Error {
    /// No session exists where one is required
    #[error("not signed in")]
    Unauthenticated,

    /// A session exists but carries no usable token
    #[error("session has no usable token")]
    MissingToken,

    /// The request exceeded the fixed per-call timeout
    #[error("request timed out")]
    Timeout,

    /// Non-2xx response or a network failure from the underlying client
    #[error("transport error (status {status:?})")]
    Transport {
        /// HTTP status, when a response was received
        status: Option<u16>,
        /// The `message` field extracted from the error body, when parseable
        message: Option<String>,
    },

    /// 200 response whose payload was semantically empty for a by-id lookup
    #[error("{0}")]
    NotFound(String),

    /// Sign-in rejected by the remote API
    #[error("invalid email or password")]
    InvalidCredentials,

    /// JSON serialization or deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Environment configuration errors
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else {
            Error::Transport {
                status: err.status().map(|s| s.as_u16()),
                message: None,
            }
        }
    }
}

impl Error {
    /// The server-supplied message carried by this error, if any.
    ///
    /// Used when constructing failure envelopes: a server message wins over
    /// the operation's fixed fallback string.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Error::Transport {
                message: Some(msg), ..
            } => Some(msg),
            Error::NotFound(msg) => Some(msg),
            _ => None,
        }
    }
}
