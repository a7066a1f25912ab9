//! Error types of the client core.
//!
//! `HttpError` is what every API call returns on failure; views turn it into
//! a human readable message with [`HttpError::user_message`]. `FormError`
//! never leaves the client: it is raised before anything is dispatched.

use thiserror::Error;

/// Shown instead of a generic fallback when the server rejected the token
/// without explaining why.
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, payload: Option<String> },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The request body could not be serialized.
    #[error("invalid request body: {0}")]
    Encode(String),
    /// A 2xx response whose body could not be decoded.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl HttpError {
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn payload(&self) -> Option<&str> {
        match self {
            HttpError::Status { payload, .. } => payload.as_deref(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    /// Server payload verbatim when there is one, otherwise `fallback`
    /// (or the session-expired message for authorization failures).
    pub fn user_message(&self, fallback: &str) -> String {
        match self.payload() {
            Some(payload) => payload.to_string(),
            None if self.is_unauthorized() => SESSION_EXPIRED_MESSAGE.to_string(),
            None => fallback.to_string(),
        }
    }
}

/// Local validation failures of the forms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required.")]
    Required(&'static str),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please fill in all fields.")]
    Incomplete,
    #[error("Please enter a valid date.")]
    InvalidDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_wins_over_fallback() {
        let err = HttpError::Status {
            status: 400,
            payload: Some("Email already in use".into()),
        };
        assert_eq!(err.user_message("Failed"), "Email already in use");
    }

    #[test]
    fn unauthorized_without_payload_asks_for_login() {
        let err = HttpError::Status {
            status: 401,
            payload: None,
        };
        assert!(err.is_unauthorized());
        assert_eq!(err.user_message("Failed"), SESSION_EXPIRED_MESSAGE);
    }

    #[test]
    fn network_failure_uses_fallback() {
        let err = HttpError::Network("connection refused".into());
        assert!(!err.is_unauthorized());
        assert_eq!(err.user_message("Failed to save lead."), "Failed to save lead.");
    }

    #[test]
    fn form_errors_render_as_sentences() {
        assert_eq!(FormError::Required("Name").to_string(), "Name is required.");
        assert_eq!(FormError::Incomplete.to_string(), "Please fill in all fields.");
    }
}
