// src/domain/native_product/repository.rs
use super::{entity::NativeProduct, listing::NativeProductListing};
use crate::domain::{errors::DomainResult, pagination::QueryOf};
use async_trait::async_trait;

#[async_trait]
pub trait NativeProductRepository: Send + Sync {
    async fn list(&self, query: QueryOf<NativeProductListing>) -> DomainResult<Vec<NativeProduct>>;
}
