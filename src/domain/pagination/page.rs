// src/domain/pagination/page.rs
use super::{
    codec::encode_next_key,
    cursor::Advance,
    error::CursorError,
    options::ListOptions,
};
use serde::Serialize;
use utoipa::ToSchema;

/// One page of a listing plus the token for the next one.
///
/// `nextKey` is always present on the wire and is `null` once the store has
/// returned fewer records than the page limit.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(rename = "nextKey")]
    pub next_key: Option<String>,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            next_key: None,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            next_key: self.next_key,
        }
    }
}

/// Builds the next key from the records a store returned for `options`.
///
/// A next key is produced only when the store filled the page. A short page
/// (including an empty one) means the listing is exhausted.
pub fn next_key_for<F, C, R>(
    options: &ListOptions<F, C>,
    records: &[R],
) -> Result<Option<String>, CursorError>
where
    F: Clone + Serialize,
    C: Advance<R> + Serialize,
{
    if records.len() < options.limit.as_usize() {
        return Ok(None);
    }
    let Some(last) = records.last() else {
        return Ok(None);
    };
    let next = options.with_cursor(options.cursor.advance(last, options.limit));
    encode_next_key(&next).map(Some)
}

/// Formats the store's records and attaches the next key.
pub fn assemble<F, C, R, T>(
    options: &ListOptions<F, C>,
    records: Vec<R>,
    format: impl FnMut(R) -> T,
) -> Result<Page<T>, CursorError>
where
    F: Clone + Serialize,
    C: Advance<R> + Serialize,
{
    let next_key = next_key_for(options, &records)?;
    Ok(Page {
        items: records.into_iter().map(format).collect(),
        next_key,
    })
}
