use serde::{Deserialize, Serialize};

/// Fallback when neither the service nor the transport supplies a message.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// The single client-side error kind: a remote call failed.
///
/// Network failures, 4xx and 5xx responses all collapse to this shape.
/// The message is resolved with a fixed priority: a service-supplied
/// `message` field, else the transport-level message, else
/// [`GENERIC_ERROR_MESSAGE`]. Callers never see raw transport errors.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
}

/// Error body shape returned by the warehouse service
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            return Self {
                message: GENERIC_ERROR_MESSAGE.to_string(),
            };
        }
        Self { message }
    }

    /// Normalize a transport-level failure (connect error, decode error, ...)
    pub fn from_transport(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<ErrorResponse> for ApiError {
    fn from(body: ErrorResponse) -> Self {
        Self::new(body.message)
    }
}

/// Custom result type for the client
pub type ApiResult<T> = Result<T, ApiError>;
