//! Conditional-request helpers for the served OpenAPI document.
use axum::http::{HeaderMap, header};
use std::sync::OnceLock;
use std::time::SystemTime;

static STARTUP_DATE: OnceLock<String> = OnceLock::new();

/// `BUILD_DATE` baked in at compile time, else the process start time.
pub fn last_modified_str() -> Option<&'static str> {
    option_env!("BUILD_DATE").or_else(|| {
        Some(
            STARTUP_DATE
                .get_or_init(|| httpdate::fmt_http_date(SystemTime::now()))
                .as_str(),
        )
    })
}

/// Quoted 64-bit FNV-1a digest of the document.
pub(crate) fn compute_simple_etag(bytes: &[u8]) -> String {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0100_0000_01b3;

    let hash = bytes
        .iter()
        .fold(OFFSET_BASIS, |hash, &byte| (hash ^ u64::from(byte)).wrapping_mul(PRIME));
    format!("\"{hash:x}\"")
}

/// Opaque part of an entity tag: no `W/` prefix, no quotes, no backslash
/// escapes.
pub fn etag_value(token: &str) -> String {
    let token = token.trim();
    let token = token
        .strip_prefix("W/")
        .or_else(|| token.strip_prefix("w/"))
        .unwrap_or(token);

    let mut unescaped = String::with_capacity(token.len());
    let mut chars = token.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => unescaped.extend(chars.next()),
            other => unescaped.push(other),
        }
    }
    unescaped.trim_matches('"').to_string()
}

pub fn weak_match(a: &str, b: &str) -> bool {
    etag_value(a) == etag_value(b)
}

/// `If-None-Match` against `actual`; supports `*` and candidate lists.
pub fn inm_matches(headers: &HeaderMap, actual: &str) -> bool {
    let Some(value) = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let value = value.trim();
    value == "*" || value.split(',').any(|candidate| weak_match(candidate, actual))
}

pub fn ims_matches(headers: &HeaderMap) -> bool {
    let since = headers
        .get(header::IF_MODIFIED_SINCE)
        .and_then(|value| value.to_str().ok());
    matches!((since, last_modified_str()), (Some(since), Some(lm)) if since == lm)
}
