use reqwest::Client;
use tracing::{debug, instrument, warn};

use logram_core::DispatchRequest;

use crate::config::{BodyFormat, ParseMode, TelegramConfig};
use crate::error::TelegramError;
use crate::types::{ApiResponse, Envelope};

/// Outcome of one delivery attempt to a single recipient.
pub type DeliveryOutcome = Result<ApiResponse, TelegramError>;

/// Synchronous Bot API delivery client.
///
/// Holds the immutable configuration and a pooled HTTP client; cloning is
/// cheap and clones share the connection pool, so concurrent sends may
/// interleave freely.
#[derive(Clone)]
pub struct TelegramClient {
    config: TelegramConfig,
    client: Client,
}

impl TelegramClient {
    /// Create a client with a default HTTP client honoring the configured
    /// timeout.
    pub fn new(config: TelegramConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("failed to build HTTP client");
        Self { config, client }
    }

    /// Create a client around an existing `reqwest::Client`.
    ///
    /// Useful for testing or for sharing a connection pool.
    pub fn with_client(config: TelegramConfig, client: Client) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &TelegramConfig {
        &self.config
    }

    /// Full endpoint URL for a request: `{base_url}/bot{token}/{method}`.
    fn endpoint(&self, request: &DispatchRequest) -> String {
        format!(
            "{}/bot{}/{}",
            self.config.base_url,
            self.config.token,
            request.method().as_str()
        )
    }

    /// Encode the per-recipient body. Fails before any network I/O.
    fn build_body(
        &self,
        chat_id: &str,
        request: &DispatchRequest,
    ) -> Result<(&'static str, Vec<u8>), TelegramError> {
        let envelope = Envelope {
            chat_id,
            request,
            parse_mode: self.config.parse_mode.map(ParseMode::as_str),
        };
        match self.config.body_format {
            BodyFormat::Json => Ok(("application/json", serde_json::to_vec(&envelope)?)),
            BodyFormat::Form => {
                // serde_urlencoded cannot flatten nested serializers, so go
                // through a JSON map of plain string fields first.
                let value = serde_json::to_value(&envelope)?;
                let body = serde_urlencoded::to_string(&value)?;
                Ok(("application/x-www-form-urlencoded", body.into_bytes()))
            }
        }
    }

    /// Deliver a request to a single recipient and interpret the response.
    ///
    /// Blocks for one HTTP round trip. An `ok: false` answer becomes
    /// [`TelegramError::Api`] carrying the API's `description`; a transport
    /// failure surfaces as [`TelegramError::Http`].
    #[instrument(skip(self, request), fields(method = request.method().as_str()))]
    pub async fn send_to(
        &self,
        chat_id: &str,
        request: &DispatchRequest,
    ) -> Result<ApiResponse, TelegramError> {
        let (content_type, body) = self.build_body(chat_id, request)?;
        let url = self.endpoint(request);

        debug!(content_type, "delivering notification");

        let response = self
            .client
            .post(&url)
            .header("Content-Type", content_type)
            .body(body)
            .send()
            .await?;

        let text = response.text().await?;
        let api: ApiResponse = serde_json::from_str(&text)
            .map_err(|_| TelegramError::InvalidResponse(text.clone()))?;

        if api.ok {
            Ok(api)
        } else {
            let description = api
                .description
                .unwrap_or_else(|| "no description provided".to_owned());
            Err(TelegramError::Api(description))
        }
    }

    /// Deliver a request to every configured recipient, in declared order.
    ///
    /// Each recipient gets its own independent request; a failure for one
    /// never suppresses the attempts for the others. Returns the
    /// per-recipient outcomes paired with their chat identifiers.
    pub async fn broadcast(&self, request: &DispatchRequest) -> Vec<(String, DeliveryOutcome)> {
        let mut outcomes = Vec::with_capacity(self.config.recipients.len());
        for chat_id in &self.config.recipients {
            let outcome = self.send_to(chat_id, request).await;
            outcomes.push((chat_id.clone(), outcome));
        }
        outcomes
    }

    /// Deliver to every recipient and collapse the outcomes.
    ///
    /// All recipients are attempted; on success the decoded responses come
    /// back in recipient order, otherwise the first failure is returned
    /// after the remaining recipients were still tried.
    #[instrument(skip(self, request), fields(method = request.method().as_str()))]
    pub async fn execute(
        &self,
        request: &DispatchRequest,
    ) -> Result<Vec<ApiResponse>, TelegramError> {
        let mut responses = Vec::new();
        let mut first_error = None;

        for (chat_id, outcome) in self.broadcast(request).await {
            match outcome {
                Ok(response) => responses.push(response),
                Err(err) => {
                    warn!(%chat_id, error = %err, "delivery failed");
                    if first_error.is_none() {
                        first_error = Some(err);
                    }
                }
            }
        }

        match first_error {
            None => Ok(responses),
            Some(err) => Err(err),
        }
    }
}
