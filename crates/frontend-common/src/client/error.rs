//! Client error types

use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an unexpected error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Credentials or token rejected
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bad request (the backend's answer to wrong credentials)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Authenticated but not allowed, e.g. an account awaiting approval
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code and response body
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::Unauthorized(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Raw response body carried by a status error
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::BadRequest(message)
            | Self::Unauthorized(message)
            | Self::Forbidden(message)
            | Self::NotFound(message)
            | Self::ServerError { message, .. } => Some(message),
            Self::Request(_) | Self::Serialization(_) | Self::Configuration(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn maps_status_codes() {
        let err = ClientError::from_status(StatusCode::BAD_REQUEST, "bad".into());
        assert!(matches!(err, ClientError::BadRequest(ref m) if m == "bad"));

        let err = ClientError::from_status(StatusCode::FORBIDDEN, "wait".into());
        assert!(matches!(err, ClientError::Forbidden(_)));

        let err = ClientError::from_status(StatusCode::UNAUTHORIZED, String::new());
        assert!(matches!(err, ClientError::Unauthorized(_)));

        let err = ClientError::from_status(StatusCode::BAD_GATEWAY, "down".into());
        assert!(matches!(err, ClientError::ServerError { status: 502, .. }));
        assert_eq!(err.body(), Some("down"));
    }

    #[test]
    fn configuration_error_has_no_body() {
        assert_eq!(ClientError::Configuration("x".into()).body(), None);
    }
}
