// src/domain/pagination/query.rs
use super::{cursor::CursorPosition, options::ListOptions, sort::SortSpec};

/// Where the store should begin reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageStart<K> {
    First,
    /// Position on the record with this key, then skip it.
    AfterKey(K),
    /// Skip this many records from the start of the ordered set.
    Offset(u64),
}

impl<K> PageStart<K> {
    pub const fn skip(&self) -> u64 {
        match self {
            Self::First => 0,
            Self::AfterKey(_) => 1,
            Self::Offset(n) => *n,
        }
    }
}

/// What a Resource Store's list operation receives.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreQuery<F, K> {
    pub filters: F,
    pub sort: SortSpec,
    pub start: PageStart<K>,
    /// Fetch size. Exactly the page limit, never one more.
    pub limit: u32,
}

impl<F, K> StoreQuery<F, K> {
    pub fn limit_i64(&self) -> i64 {
        i64::from(self.limit)
    }
}

pub fn to_store_query<F, C>(options: &ListOptions<F, C>, sort: SortSpec) -> StoreQuery<F, C::Key>
where
    F: Clone,
    C: CursorPosition,
{
    StoreQuery {
        filters: options.filters.clone(),
        sort,
        start: options.cursor.start(),
        limit: options.limit.get(),
    }
}
