//! Client error types

use serde::Deserialize;
use thiserror::Error;

/// Everything that can go wrong talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or transport error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("Server error {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status {
        status: u16,
        message: Option<String>,
    },

    /// Response body was not the JSON we expected
    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Required form fields missing; no request was sent
    #[error("{0}")]
    Validation(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// Build a status error, pulling `message` out of a JSON body if present.
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());
        Self::Status {
            status: status.as_u16(),
            message,
        }
    }

    /// Text to show the user: the backend's own message or a validation
    /// message when there is one, `fallback` otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Validation(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_status_extracts_backend_message() {
        let err = ApiError::from_status(
            StatusCode::UNAUTHORIZED,
            r#"{"message":"Invalid credentials"}"#,
        );
        assert_eq!(err.user_message("Login failed."), "Invalid credentials");
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_status_without_json_uses_fallback() {
        let err = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        assert_eq!(err.user_message("Login failed."), "Login failed.");
        assert!(!err.is_unauthorized());
        assert_eq!(err.to_string(), "Server error 500: no message");
    }

    #[test]
    fn test_blank_message_is_ignored() {
        let err = ApiError::from_status(StatusCode::BAD_REQUEST, r#"{"message":"  "}"#);
        assert_eq!(err.user_message("Failed."), "Failed.");
    }

    #[test]
    fn test_validation_message_is_shown() {
        let err = ApiError::Validation("Title and image are required.".into());
        assert_eq!(
            err.user_message("Failed to store banner."),
            "Title and image are required."
        );
    }
}
