// src/domain/pagination/mod.rs
//! Opaque next-key pagination shared by every list endpoint.
pub mod codec;
pub mod cursor;
pub mod error;
pub mod gate;
pub mod limit;
pub mod listing;
pub mod options;
pub mod page;
pub mod query;
pub mod sort;

pub use codec::{decode_next_key, encode_next_key};
pub use cursor::{Advance, CursorKey, CursorPosition, KeysetCursor, MAX_OFFSET, OffsetCursor};
pub use error::{CursorError, GateError};
pub use gate::{IntoRawList, ListRequest, RawList, resolve_options, validate_next_key};
pub use limit::{LimitOutOfRange, PageLimit};
pub use listing::{FilterRules, KeyOf, Listing, OptionsOf, QueryOf};
pub use options::ListOptions;
pub use page::{Page, assemble, next_key_for};
pub use query::{PageStart, StoreQuery, to_store_query};
pub use sort::{SortDirection, SortKey, SortSpec};
