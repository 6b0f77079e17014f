use serde::{Deserialize, Serialize};

use logram_core::DispatchRequest;

/// The Bot API response envelope.
///
/// Every call answers with `{ok, result?, description?}`; `ok: false` means
/// the request was rejected and `description` says why.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub ok: bool,

    /// Human-readable rejection reason, present when `ok` is `false`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Method-specific result object, present when `ok` is `true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
}

/// Outgoing request body: the recipient plus the method-specific fields.
#[derive(Serialize)]
pub(crate) struct Envelope<'a> {
    pub chat_id: &'a str,

    #[serde(flatten)]
    pub request: &'a DispatchRequest,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<&'static str>,
}
