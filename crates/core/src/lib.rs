//! Core types for the logram notification pipeline.
//!
//! This crate defines the pieces shared by every delivery backend:
//!
//! - [`Level`] — ordered log severities
//! - [`LogRecord`] — a rendered log entry with optional context attachments
//! - [`DispatchRequest`] — the classified Bot API call for a record
//! - [`Handler`] / [`HandlerStack`] — the pipeline contract a backend plugs
//!   into
//!
//! Classification is a pure function of the record's context: at most one of
//! the `animation`, `photo`, or `video` context keys selects a media method
//! (in that precedence order), anything else falls through to a plain text
//! message.

pub mod dispatch;
pub mod handler;
pub mod level;
pub mod record;

pub use dispatch::{ApiMethod, DispatchRequest};
pub use handler::{Handler, HandlerStack};
pub use level::{Level, ParseLevelError};
pub use record::{Attachment, LogRecord};
