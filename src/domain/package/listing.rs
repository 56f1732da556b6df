// src/domain/package/listing.rs
use super::entity::{Package, PackageId};
use crate::domain::{
    market::Region,
    pagination::{FilterRules, KeysetCursor, Listing, PageLimit, SortSpec},
    product::{ProductId, listing::ID_ASC_KEYS},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageFilters {
    pub region: Region,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
}

impl FilterRules for PackageFilters {}

pub struct PackageListing;

impl Listing for PackageListing {
    type Filters = PackageFilters;
    type Cursor = KeysetCursor<PackageId>;
    type Record = Package;

    const NAME: &'static str = "packages";
    const DEFAULT_LIMIT: PageLimit = PageLimit::from_const(30);

    fn sort(_: &PackageFilters) -> SortSpec {
        SortSpec::new(ID_ASC_KEYS)
    }
}
