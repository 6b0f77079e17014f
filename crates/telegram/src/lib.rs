//! Telegram Bot API delivery backend for the logram notification pipeline.
//!
//! A log record is classified into one of the four Bot API send methods
//! (`sendMessage`, `sendPhoto`, `sendAnimation`, `sendVideo`), the matching
//! payload is built, and one HTTPS `POST` goes out per configured recipient.
//! On the logging path delivery is fire-and-forget: the caller's log write
//! returns immediately and never learns of a delivery failure. The client's
//! async surface is synchronous delivery for direct invocation and tests.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use logram_core::{Level, LogRecord};
//! use logram_telegram::{TelegramClient, TelegramConfig, TelegramHandler};
//!
//! # async fn example() -> Result<(), logram_telegram::TelegramError> {
//! let config = TelegramConfig::new("123456:bot-token", "42")
//!     .with_recipient("-100987654321");
//! let client = TelegramClient::new(config);
//!
//! // Direct, synchronous delivery.
//! let record = LogRecord::new(Level::Error, "database unreachable");
//! client
//!     .execute(&logram_core::DispatchRequest::classify(&record))
//!     .await?;
//!
//! // Or as a pipeline handler (fire-and-forget, requires a tokio runtime).
//! let handler = TelegramHandler::new(client).with_level(Level::Warning);
//! # let _ = handler;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod handler;
#[cfg(test)]
pub(crate) mod test_support;
pub mod types;

pub use client::{DeliveryOutcome, TelegramClient};
pub use config::{BASE_URL_ENV, BodyFormat, DEFAULT_BASE_URL, ParseMode, TelegramConfig};
pub use error::TelegramError;
pub use handler::TelegramHandler;
pub use types::ApiResponse;
