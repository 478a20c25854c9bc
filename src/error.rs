//! Unified error types
//!
//! `ApiError` covers everything the HTTP client core and the resource
//! modules can fail with. `AppError` is the top-level error of the binary
//! and serializes to a `{code, message}` pair.

use serde::Serialize;
use thiserror::Error;

use crate::auth::SessionError;
use crate::config::RetryPolicy;
use crate::import::ImportError;

/// Errors produced by the HTTP client core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// No response was received (connection refused, DNS, reset...)
    #[error("Network error: {0}")]
    Network(String),

    /// The request timed out before a response arrived
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Non-2xx response
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be decoded into the expected type
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// The client could not be built or the request could not be formed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Authenticated, but the role is not allowed to use the dashboard
    #[error("Access denied for role: {0}")]
    AccessDenied(String),
}

impl ApiError {
    /// HTTP status of the failed response, if there was one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 401: the session has expired
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// 5xx: transient server failure
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(status) if status >= 500)
    }

    /// Whether the retry policy allows resending the request after this error
    pub fn is_retryable(&self, policy: &RetryPolicy) -> bool {
        match self {
            Self::Http { status, .. } => *status >= 500,
            Self::Timeout(_) => policy.retry_on_timeout,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else if err.is_builder() {
            Self::Config(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// API call failed
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Bulk import input could not be parsed
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// Current session could not be resolved
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// File operation error
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Serializable error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for client-side handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Api(ApiError::Http { status: 401, .. }) => "SESSION_EXPIRED",
            Self::Api(ApiError::AccessDenied(_)) => "ACCESS_DENIED",
            Self::Api(_) => "API_ERROR",
            Self::Import(_) => "IMPORT_ERROR",
            Self::Session(_) => "SESSION_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        ErrorResponse::from(self).serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_predicates() {
        let unauthorized = ApiError::Http { status: 401, body: String::new() };
        assert!(unauthorized.is_unauthorized());
        assert!(!unauthorized.is_server_error());

        let unavailable = ApiError::Http { status: 503, body: "down".to_string() };
        assert!(unavailable.is_server_error());
        assert_eq!(unavailable.status(), Some(503));

        assert_eq!(ApiError::Network("refused".to_string()).status(), None);
    }

    #[test]
    fn test_retryable_only_on_5xx_by_default() {
        let policy = RetryPolicy::default();
        assert!(ApiError::Http { status: 500, body: String::new() }.is_retryable(&policy));
        assert!(!ApiError::Http { status: 404, body: String::new() }.is_retryable(&policy));
        assert!(!ApiError::Http { status: 401, body: String::new() }.is_retryable(&policy));
        assert!(!ApiError::Network("reset".to_string()).is_retryable(&policy));
        assert!(!ApiError::Timeout("30s".to_string()).is_retryable(&policy));
    }

    #[test]
    fn test_timeout_retryable_when_enabled() {
        let policy = RetryPolicy {
            retry_on_timeout: true,
            ..RetryPolicy::default()
        };
        assert!(ApiError::Timeout("30s".to_string()).is_retryable(&policy));
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::Http { status: 404, body: "not found".to_string() };
        assert_eq!(err.to_string(), "HTTP 404: not found");

        let err = AppError::internal("something went wrong");
        assert_eq!(err.to_string(), "Internal error: something went wrong");
    }

    #[test]
    fn test_error_serialization() {
        let err = AppError::from(ApiError::Http { status: 401, body: String::new() });
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("SESSION_EXPIRED"));

        let err = AppError::internal("test error");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("INTERNAL_ERROR"));
        assert!(json.contains("test error"));
    }
}
