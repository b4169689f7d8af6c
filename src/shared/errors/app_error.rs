use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Connectivity error: {0}")]
    Connectivity(String),

    /// Milliseconds waited before giving up
    #[error("Request timed out after {0}ms")]
    Timeout(u64),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("Unexpected response {status:?}: {message}")]
    Unclassified { status: Option<u16>, message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Request cancelled")]
    Cancelled,
}

impl AppError {
    /// Classify a non-success HTTP status returned by the backend.
    pub fn from_status(status: StatusCode, message: impl Into<String>) -> Self {
        let message = message.into();
        match status.as_u16() {
            401 => AppError::Unauthorized(message),
            403 => AppError::Forbidden(message),
            404 => AppError::NotFound(message),
            code @ 500..=599 => AppError::ServerError {
                status: code,
                message,
            },
            code => AppError::Unclassified {
                status: Some(code),
                message,
            },
        }
    }

    /// HTTP status attached to the error, when the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Unauthorized(_) => Some(401),
            AppError::Forbidden(_) => Some(403),
            AppError::NotFound(_) => Some(404),
            AppError::ServerError { status, .. } => Some(*status),
            AppError::Unclassified { status, .. } => *status,
            _ => None,
        }
    }

    /// Whether a transport-level retry may succeed
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            AppError::Connectivity(_) | AppError::Timeout(_) | AppError::ServerError { .. }
        )
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Connectivity(format!("Request timeout: {}", err))
        } else if err.is_connect() || err.is_request() {
            AppError::Connectivity(format!("Failed to reach backend: {}", err))
        } else if err.is_decode() {
            AppError::SerializationError(err.to_string())
        } else if let Some(status) = err.status() {
            AppError::from_status(status, err.to_string())
        } else {
            AppError::Unclassified {
                status: None,
                message: err.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(err: chrono::ParseError) -> Self {
        AppError::InvalidInput(format!("Invalid date/time: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
