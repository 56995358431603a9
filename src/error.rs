//! API Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never produced a response
    #[error("network error: {0}")]
    Network(String),
    /// Request body could not be built
    #[error("encode error: {0}")]
    Encode(String),
    /// Response was not the expected JSON
    #[error("decode error: {0}")]
    Decode(String),
    /// Server answered with an `error` field
    #[error("{0}")]
    Rejected(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}
