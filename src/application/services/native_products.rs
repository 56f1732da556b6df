// src/application/services/native_products.rs
use std::sync::Arc;

use crate::{
    application::{ApplicationResult, dto::NativeProductDto, listing},
    domain::{
        market::{Region, Source},
        native_product::{NativeProductFilters, NativeProductListing, NativeProductRepository},
        pagination::{IntoRawList, ListRequest, OffsetCursor, Page, RawList},
        product::ProductId,
    },
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct ListNativeProductsParams {
    /// Page size, 1 to 40. Defaults to 30.
    pub limit: Option<u64>,
    #[param(inline)]
    pub region: Region,
    /// Substring of the native name.
    pub name: Option<String>,
    pub product_id: Option<i64>,
    /// Only records not linked to any product. Cannot be combined with `productId`.
    #[serde(default)]
    pub no_product_id: bool,
    #[param(inline)]
    pub source: Option<Source>,
    /// Number of records to skip.
    pub offset: Option<u64>,
}

impl IntoRawList<NativeProductFilters, OffsetCursor> for ListNativeProductsParams {
    fn into_raw(self) -> RawList<NativeProductFilters, OffsetCursor> {
        RawList {
            filters: NativeProductFilters {
                region: self.region,
                name: self.name.filter(|name| !name.is_empty()),
                product_id: self.product_id.map(ProductId),
                no_product_id: self.no_product_id,
                source: self.source,
            },
            limit: self.limit,
            cursor: OffsetCursor {
                offset: self.offset,
            },
        }
    }
}

pub struct NativeProductService {
    native_products: Arc<dyn NativeProductRepository>,
}

impl NativeProductService {
    pub fn new(native_products: Arc<dyn NativeProductRepository>) -> Self {
        Self { native_products }
    }

    pub async fn list_native_products(
        &self,
        request: ListRequest<ListNativeProductsParams>,
    ) -> ApplicationResult<Page<NativeProductDto>> {
        let (options, query) = listing::plan::<NativeProductListing, _>(request)?;
        let records = self.native_products.list(query).await?;
        listing::finish::<NativeProductListing, _>(&options, records, NativeProductDto::from)
    }
}
