use std::env;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default Bot API origin.
pub const DEFAULT_BASE_URL: &str = "https://api.telegram.org";

/// Environment variable consulted for a base URL override.
pub const BASE_URL_ENV: &str = "TELEGRAM_BASE_URL";

/// Text formatting applied by Telegram to the message text or caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseMode {
    Markdown,
    MarkdownV2,
    #[serde(rename = "HTML")]
    Html,
}

impl ParseMode {
    /// Returns the mode name as the Bot API expects it.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Markdown => "Markdown",
            Self::MarkdownV2 => "MarkdownV2",
            Self::Html => "HTML",
        }
    }
}

/// Request body encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyFormat {
    /// `application/json` (the default).
    #[default]
    Json,
    /// `application/x-www-form-urlencoded`.
    Form,
}

/// Configuration for the Telegram delivery client.
///
/// The recipient list is ordered and never empty: the constructor takes the
/// first chat and [`with_recipient`](Self::with_recipient) appends more.
/// Everything is fixed at construction; delivery never mutates it.
#[derive(Clone)]
pub struct TelegramConfig {
    /// Bot token issued by `@BotFather`.
    pub token: String,

    /// Destination chat identifiers, in delivery order.
    pub recipients: Vec<String>,

    /// Bot API origin. Resolved once at construction: an explicit
    /// [`with_base_url`](Self::with_base_url) wins over the
    /// [`BASE_URL_ENV`] environment variable, which wins over
    /// [`DEFAULT_BASE_URL`].
    pub base_url: String,

    /// Optional formatting for message text and captions.
    pub parse_mode: Option<ParseMode>,

    /// Request body encoding (JSON unless configured otherwise).
    pub body_format: BodyFormat,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl TelegramConfig {
    /// Create a configuration for the given bot token and first recipient.
    ///
    /// Defaults: base URL from the environment or the public API origin,
    /// no parse mode, JSON bodies, 30-second timeout.
    pub fn new(token: impl Into<String>, recipient: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            recipients: vec![recipient.into()],
            base_url: resolve_base_url(env::var(BASE_URL_ENV).ok()),
            parse_mode: None,
            body_format: BodyFormat::Json,
            timeout: Duration::from_secs(30),
        }
    }

    /// Append another recipient chat.
    #[must_use]
    pub fn with_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipients.push(recipient.into());
        self
    }

    /// Override the Bot API origin. Takes precedence over the environment.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the parse mode sent with every message.
    #[must_use]
    pub fn with_parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = Some(mode);
        self
    }

    /// Set the request body encoding.
    #[must_use]
    pub fn with_body_format(mut self, format: BodyFormat) -> Self {
        self.body_format = format;
        self
    }

    /// Set the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the per-request timeout in seconds.
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }
}

impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("token", &"[REDACTED]")
            .field("recipients", &self.recipients)
            .field("base_url", &self.base_url)
            .field("parse_mode", &self.parse_mode)
            .field("body_format", &self.body_format)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Fold the environment override over the hard-coded default.
fn resolve_base_url(env_value: Option<String>) -> String {
    match env_value {
        Some(url) if !url.trim().is_empty() => url,
        _ => DEFAULT_BASE_URL.to_owned(),
    }
}
