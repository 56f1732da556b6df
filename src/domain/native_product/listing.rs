// src/domain/native_product/listing.rs
use super::entity::NativeProduct;
use crate::domain::{
    market::{Region, Source},
    pagination::{FilterRules, Listing, OffsetCursor, PageLimit, SortKey, SortSpec},
    product::ProductId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeProductFilters {
    pub region: Region,
    /// Case-insensitive substring match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub no_product_id: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
}

impl FilterRules for NativeProductFilters {
    fn check(&self) -> Result<(), String> {
        if self.no_product_id && self.product_id.is_some() {
            return Err("productId cannot be combined with noProductId".into());
        }
        Ok(())
    }
}

// Unlinked records first so they surface for matching.
const UNLINKED_FIRST_KEYS: &[SortKey] = &[
    SortKey::desc("product_id").nulls_first(),
    SortKey::desc("created_at"),
    SortKey::desc("source"),
    SortKey::desc("id"),
];

pub struct NativeProductListing;

impl Listing for NativeProductListing {
    type Filters = NativeProductFilters;
    type Cursor = OffsetCursor;
    type Record = NativeProduct;

    const NAME: &'static str = "native products";
    const DEFAULT_LIMIT: PageLimit = PageLimit::from_const(30);

    fn sort(_: &NativeProductFilters) -> SortSpec {
        SortSpec::new(UNLINKED_FIRST_KEYS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters() -> NativeProductFilters {
        NativeProductFilters {
            region: Region::Jp,
            name: None,
            product_id: None,
            no_product_id: false,
            source: None,
        }
    }

    #[test]
    fn product_id_and_no_product_id_conflict() {
        let mut f = filters();
        f.product_id = Some(ProductId(4));
        assert!(f.check().is_ok());
        f.no_product_id = true;
        assert!(f.check().is_err());
    }

    #[test]
    fn ordering_is_not_keyset_friendly() {
        let sort = NativeProductListing::sort(&filters());
        assert_eq!(sort.keyset_comparator(), None);
        assert_eq!(sort.tie_break().column, "id");
    }
}
