use serde::Serialize;

use crate::record::{Attachment, LogRecord};

/// Bot API method selected for a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiMethod {
    SendMessage,
    SendPhoto,
    SendAnimation,
    SendVideo,
}

impl ApiMethod {
    /// Returns the wire method name as it appears in the request URL.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SendMessage => "sendMessage",
            Self::SendPhoto => "sendPhoto",
            Self::SendAnimation => "sendAnimation",
            Self::SendVideo => "sendVideo",
        }
    }
}

/// A classified outbound call: the Bot API method plus its method-specific
/// fields.
///
/// Built once per record and immutable afterwards. The payload never contains
/// `chat_id`; the delivery client injects the recipient when it builds each
/// request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DispatchRequest {
    SendMessage {
        text: String,
    },
    SendPhoto {
        photo: String,
        caption: String,
    },
    SendAnimation {
        animation: String,
        caption: String,
    },
    SendVideo {
        video: String,
        caption: String,
    },
}

impl DispatchRequest {
    /// Classify a record into the Bot API call that delivers it.
    ///
    /// Pure and total: an `animation` context attachment selects
    /// `sendAnimation`, then `photo`, then `video`; a record without a
    /// usable attachment becomes a plain `sendMessage`. The record's
    /// rendered text always rides along as `text` or `caption`.
    pub fn classify(record: &LogRecord) -> Self {
        let formatted = record.formatted.clone();
        match record.attachment() {
            Some(Attachment::Animation(url)) => Self::SendAnimation {
                animation: url.to_owned(),
                caption: formatted,
            },
            Some(Attachment::Photo(url)) => Self::SendPhoto {
                photo: url.to_owned(),
                caption: formatted,
            },
            Some(Attachment::Video(url)) => Self::SendVideo {
                video: url.to_owned(),
                caption: formatted,
            },
            None => Self::SendMessage { text: formatted },
        }
    }

    /// The Bot API method this request targets.
    pub fn method(&self) -> ApiMethod {
        match self {
            Self::SendMessage { .. } => ApiMethod::SendMessage,
            Self::SendPhoto { .. } => ApiMethod::SendPhoto,
            Self::SendAnimation { .. } => ApiMethod::SendAnimation,
            Self::SendVideo { .. } => ApiMethod::SendVideo,
        }
    }
}
