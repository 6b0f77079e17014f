use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::level::Level;

/// Context keys recognized as media attachments, in precedence order.
const ATTACHMENT_KEYS: [&str; 3] = ["animation", "photo", "video"];

/// A rendered log entry handed to the notification pipeline.
///
/// `formatted` is the fully rendered message text; `context` is an arbitrary
/// key/value map supplied at the log call site. The pipeline itself only
/// interprets the `animation`, `photo`, and `video` context keys (remote
/// media URLs); everything else is carried opaquely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Severity of the entry.
    pub level: Level,

    /// Rendered message text.
    pub formatted: String,

    /// Arbitrary context supplied at the call site.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub context: HashMap<String, Value>,
}

/// A media attachment resolved from a record's context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attachment<'a> {
    /// Remote animation (GIF / H.264) URL.
    Animation(&'a str),
    /// Remote photo URL.
    Photo(&'a str),
    /// Remote video URL.
    Video(&'a str),
}

impl LogRecord {
    /// Create a record with the given severity and rendered text.
    pub fn new(level: Level, formatted: impl Into<String>) -> Self {
        Self {
            level,
            formatted: formatted.into(),
            context: HashMap::new(),
        }
    }

    /// Attach a context value.
    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Resolve the record's media attachment, if any.
    ///
    /// When several attachment keys are present, `animation` wins over
    /// `photo`, which wins over `video`. A context value that is not a JSON
    /// string is treated as absent, so a malformed context degrades to a
    /// plain text message.
    pub fn attachment(&self) -> Option<Attachment<'_>> {
        for key in ATTACHMENT_KEYS {
            if let Some(url) = self.context.get(key).and_then(Value::as_str) {
                return Some(match key {
                    "animation" => Attachment::Animation(url),
                    "photo" => Attachment::Photo(url),
                    _ => Attachment::Video(url),
                });
            }
        }
        None
    }
}
