// src/application/services/products.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationError, ApplicationResult, dto::ProductDto, listing, ports::time::Clock,
    },
    domain::{
        market::{Region, Source},
        pagination::{IntoRawList, KeysetCursor, ListRequest, Page, RawList},
        product::{
            NewProduct, ProductFilters, ProductId, ProductListing, ProductPatch, ProductRepository,
        },
    },
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct GetProductParams {
    #[serde(default)]
    pub with_packages: bool,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct ListProductsParams {
    /// Page size, 1 to 40. Defaults to 30.
    pub limit: Option<u64>,
    #[param(inline)]
    pub region: Region,
    #[serde(default)]
    pub with_packages: bool,
}

impl IntoRawList<ProductFilters, KeysetCursor<ProductId>> for ListProductsParams {
    fn into_raw(self) -> RawList<ProductFilters, KeysetCursor<ProductId>> {
        RawList::new(
            ProductFilters {
                region: self.region,
                with_packages: self.with_packages,
            },
            self.limit,
        )
    }
}

pub struct CreateProductCommand {
    pub name: String,
    pub region: Region,
}

pub struct UpdateProductCommand {
    pub name: Option<String>,
    pub region: Option<Region>,
}

pub struct LinkNativeProductCommand {
    pub native_product_id: String,
    pub source: Source,
}

pub struct ProductService {
    products: Arc<dyn ProductRepository>,
    clock: Arc<dyn Clock>,
}

impl ProductService {
    pub fn new(products: Arc<dyn ProductRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { products, clock }
    }

    pub async fn get_product(
        &self,
        id: ProductId,
        params: GetProductParams,
    ) -> ApplicationResult<ProductDto> {
        self.products
            .find_by_id(id, params.with_packages)
            .await?
            .map(ProductDto::from)
            .ok_or(ApplicationError::ProductNotFound)
    }

    pub async fn create_product(&self, command: CreateProductCommand) -> ApplicationResult<ProductDto> {
        let new_product = NewProduct::new(command.name, command.region, self.clock.now())?;
        let product = self.products.insert(new_product).await?;
        tracing::info!(product_id = product.id.0, region = %product.region, "product created");
        Ok(product.into())
    }

    pub async fn list_products(
        &self,
        request: ListRequest<ListProductsParams>,
    ) -> ApplicationResult<Page<ProductDto>> {
        let (options, query) = listing::plan::<ProductListing, _>(request)?;
        let products = self.products.list(query).await?;
        listing::finish::<ProductListing, _>(&options, products, ProductDto::from)
    }

    pub async fn update_product(
        &self,
        id: ProductId,
        command: UpdateProductCommand,
    ) -> ApplicationResult<()> {
        let mut patch = ProductPatch::new(self.clock.now());
        if let Some(name) = command.name {
            patch = patch.with_name(name)?;
        }
        if let Some(region) = command.region {
            patch = patch.with_region(region);
        }
        if patch.is_empty() {
            return Err(ApplicationError::invalid_argument(
                "update requires at least one of name or region",
            ));
        }
        self.products.update(id, patch).await?;
        Ok(())
    }

    pub async fn delete_product(&self, id: ProductId) -> ApplicationResult<()> {
        self.products.delete(id).await?;
        tracing::info!(product_id = id.0, "product deleted");
        Ok(())
    }

    pub async fn link_product(
        &self,
        id: ProductId,
        command: LinkNativeProductCommand,
    ) -> ApplicationResult<()> {
        self.products
            .link(id, &command.native_product_id, command.source)
            .await?;
        tracing::info!(
            product_id = id.0,
            native_product_id = %command.native_product_id,
            source = %command.source,
            "native product linked"
        );
        Ok(())
    }

    pub async fn unlink_product(
        &self,
        id: ProductId,
        command: LinkNativeProductCommand,
    ) -> ApplicationResult<()> {
        self.products
            .unlink(id, &command.native_product_id, command.source)
            .await?;
        tracing::info!(
            product_id = id.0,
            native_product_id = %command.native_product_id,
            source = %command.source,
            "native product unlinked"
        );
        Ok(())
    }
}
