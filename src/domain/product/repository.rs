// src/domain/product/repository.rs
use super::{
    entity::{NewProduct, Product, ProductId, ProductPatch},
    listing::ProductListing,
};
use crate::domain::{errors::DomainResult, market::Source, pagination::QueryOf};
use async_trait::async_trait;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_by_id(&self, id: ProductId, with_packages: bool) -> DomainResult<Option<Product>>;
    async fn insert(&self, product: NewProduct) -> DomainResult<Product>;
    async fn list(&self, query: QueryOf<ProductListing>) -> DomainResult<Vec<Product>>;
    async fn update(&self, id: ProductId, patch: ProductPatch) -> DomainResult<()>;
    async fn delete(&self, id: ProductId) -> DomainResult<()>;
    /// Attach a native product to this product.
    async fn link(&self, id: ProductId, native_product_id: &str, source: Source) -> DomainResult<()>;
    /// Detach a native product currently linked to this product.
    async fn unlink(&self, id: ProductId, native_product_id: &str, source: Source) -> DomainResult<()>;
}
