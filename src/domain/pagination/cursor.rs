// src/domain/pagination/cursor.rs
//! Position markers carried inside a next key.
//!
//! Keyset listings remember the key of the last record they returned and the
//! store resumes strictly after it. Offset listings remember how many records
//! were already handed out and the store skips that many.
use super::{limit::PageLimit, query::PageStart};
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use std::convert::Infallible;

/// Largest offset a listing will skip to. Stores bind offsets as `BIGINT`.
pub const MAX_OFFSET: u64 = u64::MAX >> 1;

/// Records that can anchor a keyset cursor.
pub trait CursorKey {
    type Key: Clone;

    fn cursor_key(&self) -> Self::Key;
}

/// Where a listing should resume, in the shape the store understands.
pub trait CursorPosition {
    type Key: Clone;

    fn start(&self) -> PageStart<Self::Key>;
}

/// Computes the cursor for the page that follows a full page ending in `last`.
pub trait Advance<R>: CursorPosition + Sized {
    fn advance(&self, last: &R, limit: PageLimit) -> Self;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeysetCursor<K> {
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub cursor: Option<K>,
}

impl<K> KeysetCursor<K> {
    pub const fn after(key: K) -> Self {
        Self { cursor: Some(key) }
    }
}

impl<K> Default for KeysetCursor<K> {
    fn default() -> Self {
        Self { cursor: None }
    }
}

impl<K: Clone> CursorPosition for KeysetCursor<K> {
    type Key = K;

    fn start(&self) -> PageStart<K> {
        match &self.cursor {
            Some(key) => PageStart::AfterKey(key.clone()),
            None => PageStart::First,
        }
    }
}

impl<K, R> Advance<R> for KeysetCursor<K>
where
    K: Clone,
    R: CursorKey<Key = K>,
{
    fn advance(&self, last: &R, _limit: PageLimit) -> Self {
        Self::after(last.cursor_key())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetCursor {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "bounded_offset"
    )]
    pub offset: Option<u64>,
}

fn bounded_offset<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    match Option::<u64>::deserialize(deserializer)? {
        Some(offset) if offset > MAX_OFFSET => Err(D::Error::custom(format!(
            "offset {offset} exceeds {MAX_OFFSET}"
        ))),
        offset => Ok(offset),
    }
}

impl OffsetCursor {
    pub const fn at(offset: u64) -> Self {
        Self {
            offset: Some(offset),
        }
    }
}

impl CursorPosition for OffsetCursor {
    type Key = Infallible;

    fn start(&self) -> PageStart<Infallible> {
        match self.offset {
            Some(0) | None => PageStart::First,
            Some(n) => PageStart::Offset(n),
        }
    }
}

impl<R> Advance<R> for OffsetCursor {
    fn advance(&self, _last: &R, limit: PageLimit) -> Self {
        let consumed = self.offset.unwrap_or(0);
        Self::at(consumed.saturating_add(u64::from(limit.get())).min(MAX_OFFSET))
    }
}
