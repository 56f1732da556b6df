// src/domain/pagination/error.rs
use thiserror::Error;

/// Failures raised while encoding, decoding, or validating a next key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CursorError {
    /// The token is not base64 or does not carry a JSON record.
    #[error("malformed next key: {0}")]
    Decode(String),
    /// The token decoded fine but its record does not fit the listing options.
    #[error("next key does not match listing options: {0}")]
    Schema(String),
    #[error("failed to encode next key: {0}")]
    Encode(String),
}

/// Outcome of normalising a list request, split by where the bad input came from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    #[error(transparent)]
    InvalidNextKey(#[from] CursorError),
    #[error("invalid list parameters: {0}")]
    InvalidArgument(String),
}
