use tokio::runtime::Handle;
use tracing::debug;

use logram_core::{DispatchRequest, Handler, Level, LogRecord};

use crate::client::TelegramClient;
use crate::error::TelegramError;
use crate::types::ApiResponse;

/// Log handler that forwards records to Telegram.
///
/// On the pipeline path ([`Handler::handle`]) delivery is fire-and-forget:
/// the record is classified on the caller's thread, the HTTP round trips run
/// on a detached task, and the outcome is discarded. The caller's log write
/// never blocks on the network and never observes a delivery failure.
///
/// The async [`send`](Self::send) family exists for direct, explicit
/// invocation; those calls block for the round trips and surface every
/// failure.
pub struct TelegramHandler {
    client: TelegramClient,
    level: Level,
    bubble: bool,
    runtime: Handle,
}

impl TelegramHandler {
    /// Create a handler around a delivery client.
    ///
    /// Defaults to handling every level ([`Level::Debug`]) and letting
    /// records bubble to later handlers. Captures the ambient tokio runtime
    /// for background delivery; must be called from within one.
    pub fn new(client: TelegramClient) -> Self {
        Self {
            client,
            level: Level::Debug,
            bubble: true,
            runtime: Handle::current(),
        }
    }

    /// Set the minimum level this handler reacts to.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set whether handled records keep bubbling to later handlers.
    #[must_use]
    pub fn with_bubble(mut self, bubble: bool) -> Self {
        self.bubble = bubble;
        self
    }

    pub fn client(&self) -> &TelegramClient {
        &self.client
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn bubble(&self) -> bool {
        self.bubble
    }

    /// Classify a record and deliver it synchronously to every recipient.
    pub async fn send(&self, record: &LogRecord) -> Result<Vec<ApiResponse>, TelegramError> {
        self.client.execute(&DispatchRequest::classify(record)).await
    }

    /// Deliver a plain text message.
    pub async fn send_message(
        &self,
        text: impl Into<String>,
    ) -> Result<Vec<ApiResponse>, TelegramError> {
        self.client
            .execute(&DispatchRequest::SendMessage { text: text.into() })
            .await
    }

    /// Deliver a photo by URL with a caption.
    pub async fn send_photo(
        &self,
        photo: impl Into<String>,
        caption: impl Into<String>,
    ) -> Result<Vec<ApiResponse>, TelegramError> {
        self.client
            .execute(&DispatchRequest::SendPhoto {
                photo: photo.into(),
                caption: caption.into(),
            })
            .await
    }

    /// Deliver an animation by URL with a caption.
    pub async fn send_animation(
        &self,
        animation: impl Into<String>,
        caption: impl Into<String>,
    ) -> Result<Vec<ApiResponse>, TelegramError> {
        self.client
            .execute(&DispatchRequest::SendAnimation {
                animation: animation.into(),
                caption: caption.into(),
            })
            .await
    }

    /// Deliver a video by URL with a caption.
    pub async fn send_video(
        &self,
        video: impl Into<String>,
        caption: impl Into<String>,
    ) -> Result<Vec<ApiResponse>, TelegramError> {
        self.client
            .execute(&DispatchRequest::SendVideo {
                video: video.into(),
                caption: caption.into(),
            })
            .await
    }
}

impl Handler for TelegramHandler {
    fn is_handling(&self, level: Level) -> bool {
        level >= self.level
    }

    fn handle(&self, record: &LogRecord) -> bool {
        if !self.is_handling(record.level) {
            return false;
        }

        let request = DispatchRequest::classify(record);
        let client = self.client.clone();

        // Detached task; outcomes are discarded and failures surface only
        // as tracing events, never into the handler's own pipeline.
        self.runtime.spawn(async move {
            for (chat_id, outcome) in client.broadcast(&request).await {
                if let Err(error) = outcome {
                    debug!(%chat_id, %error, "background delivery failed");
                }
            }
        });

        !self.bubble
    }
}
