//! Outbound HTTP: the transport seam, the authenticated dispatcher and the
//! typed endpoints of the leads API.

mod dispatcher;
mod leads;
#[cfg(test)]
pub(crate) mod stub;

use async_trait::async_trait;
use strum::{AsRefStr, Display};

pub use dispatcher::{Dispatcher, query_string};
pub use leads::LeadsApi;

use crate::error::HttpError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A fully resolved request, ready for the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and raw body of a response, whatever the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, HttpError> {
        serde_json::from_str(&self.body).map_err(|e| HttpError::Decode(e.to_string()))
    }

    /// Error payload worth showing to a user: a JSON string is unwrapped, a
    /// JSON object contributes its `message`, anything else is the trimmed
    /// text. Blank bodies have no payload.
    pub fn error_payload(&self) -> Option<String> {
        let text = self.body.trim();
        if text.is_empty() {
            return None;
        }
        let payload = match serde_json::from_str::<serde_json::Value>(text) {
            Ok(serde_json::Value::String(message)) => Some(message),
            Ok(serde_json::Value::Object(fields)) => fields
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .or_else(|| Some(text.to_string())),
            _ => Some(text.to_string()),
        };
        payload.filter(|message| !message.trim().is_empty())
    }
}

/// Sends requests over the network.
///
/// Implementations return `Ok` for every response that arrived, including
/// 4xx/5xx ones, and `Err(HttpError::Network)` only when no response did.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, HttpError>;
}
