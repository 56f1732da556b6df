// src/domain/pagination/listing.rs
use super::{
    cursor::{Advance, CursorPosition},
    limit::PageLimit,
    options::ListOptions,
    query::StoreQuery,
    sort::SortSpec,
};
use serde::{Serialize, de::DeserializeOwned};

/// Semantic checks a filter record must pass beyond its serde shape.
pub trait FilterRules {
    fn check(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Pagination policy of one list endpoint.
///
/// Ties a filter record, a cursor kind and the record type the store returns
/// to a default page size and an ordering. The ordering must end in a unique
/// column so that pages never overlap.
pub trait Listing {
    type Filters: Clone + Serialize + DeserializeOwned + FilterRules;
    type Cursor: CursorPosition + Advance<Self::Record> + Default + Serialize + DeserializeOwned;
    type Record;

    const NAME: &'static str;
    const DEFAULT_LIMIT: PageLimit;

    fn sort(filters: &Self::Filters) -> SortSpec;
}

pub type OptionsOf<L> = ListOptions<<L as Listing>::Filters, <L as Listing>::Cursor>;

pub type KeyOf<L> = <<L as Listing>::Cursor as CursorPosition>::Key;

pub type QueryOf<L> = StoreQuery<<L as Listing>::Filters, KeyOf<L>>;
