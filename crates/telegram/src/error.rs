use thiserror::Error;

/// Errors surfaced by synchronous delivery.
///
/// Fire-and-forget delivery swallows all of these; only direct `send` /
/// `execute` callers see them.
#[derive(Debug, Error)]
pub enum TelegramError {
    /// The HTTPS call itself failed (DNS, connect, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The Bot API answered `ok: false`; carries its `description` verbatim.
    #[error("telegram API error: {0}")]
    Api(String),

    /// The response body could not be decoded as a Bot API envelope.
    #[error("unexpected response body: {0}")]
    InvalidResponse(String),

    /// The request body could not be encoded. Raised before any network
    /// call is made.
    #[error("failed to encode request body: {0}")]
    Encode(String),
}

impl From<serde_json::Error> for TelegramError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encode(err.to_string())
    }
}

impl From<serde_urlencoded::ser::Error> for TelegramError {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        Self::Encode(err.to_string())
    }
}
