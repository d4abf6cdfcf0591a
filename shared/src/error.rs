//! Error type of every remote call.

use thiserror::Error;

/// Failure of a remote call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),
    /// The server answered with a non-success HTTP status.
    #[error("HTTP error: {0}")]
    Http(u16),
    /// The envelope carried a non-success business code.
    #[error("API error {code}: {message}")]
    Api {
        /// Business code from the envelope.
        code: i32,
        /// Message from the envelope.
        message: String,
    },
    /// The body could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),
    /// The request body could not be encoded.
    #[error("Serialize error: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Parse(err.to_string())
    }
}
