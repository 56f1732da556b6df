// src/domain/pagination/codec.rs
//! Opaque next-key tokens.
//!
//! A token is the JSON text of a listing options record, base64url encoded.
//! Nothing else is embedded: no signature, no expiry, no server identity.
//! Any instance can decode what any other instance issued.
use super::error::CursorError;
use base64::{
    Engine as _, alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use serde::Serialize;
use serde_json::{Map, Value};

/// URL-safe alphabet, unpadded on encode; padded tokens are still accepted.
const NEXT_KEY_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

pub fn encode_next_key<T>(options: &T) -> Result<String, CursorError>
where
    T: Serialize + ?Sized,
{
    let json = serde_json::to_vec(options).map_err(|err| CursorError::Encode(err.to_string()))?;
    Ok(NEXT_KEY_ENGINE.encode(json))
}

/// Decode a token back into the raw record it was built from.
///
/// Only structural problems are reported here. Whether the record makes
/// sense for a given listing is decided by the gate.
pub fn decode_next_key(token: &str) -> Result<Map<String, Value>, CursorError> {
    let bytes = NEXT_KEY_ENGINE
        .decode(token)
        .map_err(|err| CursorError::Decode(format!("invalid base64: {err}")))?;

    match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Object(record)) => Ok(record),
        Ok(other) => Err(CursorError::Decode(format!(
            "expected a record, found {}",
            json_kind(&other)
        ))),
        Err(err) => Err(CursorError::Decode(format!("invalid JSON: {err}"))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a record",
    }
}
