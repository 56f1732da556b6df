// src/domain/pagination/options.rs
use super::limit::PageLimit;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Canonical listing options; this is exactly what a next key carries.
///
/// Filters and cursor are flattened so the wire record reads
/// `{ ...filters, "limit": n, "cursor" | "offset": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "F: Serialize, C: Serialize",
    deserialize = "F: DeserializeOwned, C: DeserializeOwned"
))]
pub struct ListOptions<F, C> {
    #[serde(flatten)]
    pub filters: F,
    pub limit: PageLimit,
    #[serde(flatten)]
    pub cursor: C,
}

impl<F, C: Default> ListOptions<F, C> {
    pub fn first_page(filters: F, limit: PageLimit) -> Self {
        Self {
            filters,
            limit,
            cursor: C::default(),
        }
    }
}

impl<F: Clone, C> ListOptions<F, C> {
    pub fn with_cursor(&self, cursor: C) -> Self {
        Self {
            filters: self.filters.clone(),
            limit: self.limit,
            cursor,
        }
    }
}
