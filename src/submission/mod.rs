//! Submission flow
//!
//! Wire types for the alias endpoint, the mapping from HTTP responses to
//! outcomes, and the user-facing messages shown when a submission fails.
//!
//! - `form` - form fields and presence validation
//! - `client` - the [`AliasService`] seam and its HTTP implementation

pub mod client;
pub mod form;

pub use client::{AliasService, HttpAliasClient};
pub use form::{FormField, FormFields};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default alias endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/users";

/// Shown when the server rejects a submission without saying why
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Shown when no usable response came back
pub const CONNECTION_ERROR_MESSAGE: &str = "Failed to connect to the server. Please try again.";

/// Request body: `{"email": ..., "name": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasRequest {
    pub email: String,
    pub name: String,
}

/// Success body: `{"cryptoName": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasResponse {
    pub crypto_name: String,
}

/// Failure body: `{"error": ...}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}

/// Why a submission did not produce an alias
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Non-2xx response; `message` is the server's `error` text if it sent one
    #[error("server rejected submission (HTTP {status})")]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// No response at all (connection refused, DNS, timeout)
    #[error("transport failure: {0}")]
    Transport(String),

    /// A response arrived but its body was not the expected JSON
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl SubmitError {
    /// Text to show the user for this failure
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            Self::Rejected { .. } => GENERIC_ERROR_MESSAGE.to_string(),
            Self::Transport(_) | Self::MalformedResponse(_) => {
                CONNECTION_ERROR_MESSAGE.to_string()
            }
        }
    }
}

/// Map a status code and raw body from the alias endpoint to an alias or a failure
pub fn interpret_response(status: u16, body: &str) -> Result<String, SubmitError> {
    if (200..300).contains(&status) {
        let response: AliasResponse = serde_json::from_str(body)
            .map_err(|e| SubmitError::MalformedResponse(e.to_string()))?;
        Ok(response.crypto_name)
    } else {
        let response: ErrorResponse = serde_json::from_str(body)
            .map_err(|e| SubmitError::MalformedResponse(e.to_string()))?;
        Err(SubmitError::Rejected {
            status,
            message: response.error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_with_expected_keys() {
        let request = AliasRequest {
            email: "santa@northpole.com".to_string(),
            name: "Kris Kringle".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": "santa@northpole.com", "name": "Kris Kringle"})
        );
    }

    #[test]
    fn test_success_body_uses_camel_case() {
        assert_eq!(
            interpret_response(200, r#"{"cryptoName":"Snowflake99"}"#),
            Ok("Snowflake99".to_string())
        );
        assert_eq!(
            interpret_response(201, r#"{"cryptoName":"Tinsel"}"#),
            Ok("Tinsel".to_string())
        );
    }

    #[test]
    fn test_rejection_carries_server_text() {
        let err = interpret_response(400, r#"{"error":"Email already used"}"#).unwrap_err();
        assert_eq!(err.user_message(), "Email already used");
    }

    #[test]
    fn test_rejection_without_text_is_generic() {
        let err = interpret_response(500, "{}").unwrap_err();
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);

        let err = interpret_response(409, r#"{"error":""}"#).unwrap_err();
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_non_json_body_reports_connection_problem() {
        let err = interpret_response(502, "<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, SubmitError::MalformedResponse(_)));
        assert_eq!(err.user_message(), CONNECTION_ERROR_MESSAGE);

        let err = interpret_response(200, r#"{"alias":"x"}"#).unwrap_err();
        assert!(matches!(err, SubmitError::MalformedResponse(_)));
    }

    #[test]
    fn test_transport_message() {
        let err = SubmitError::Transport("connection refused".to_string());
        assert_eq!(err.user_message(), CONNECTION_ERROR_MESSAGE);
    }
}
