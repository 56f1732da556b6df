// src/domain/product/listing.rs
use super::entity::{Product, ProductId};
use crate::domain::{
    market::Region,
    pagination::{FilterRules, KeysetCursor, Listing, PageLimit, SortKey, SortSpec},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilters {
    pub region: Region,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub with_packages: bool,
}

impl FilterRules for ProductFilters {}

pub(crate) const ID_ASC_KEYS: &[SortKey] = &[SortKey::asc("id")];

pub struct ProductListing;

impl Listing for ProductListing {
    type Filters = ProductFilters;
    type Cursor = KeysetCursor<ProductId>;
    type Record = Product;

    const NAME: &'static str = "products";
    const DEFAULT_LIMIT: PageLimit = PageLimit::from_const(30);

    fn sort(_: &ProductFilters) -> SortSpec {
        SortSpec::new(ID_ASC_KEYS)
    }
}
