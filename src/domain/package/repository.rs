// src/domain/package/repository.rs
use super::{
    entity::{NewPackage, Package, PackageId},
    listing::PackageListing,
};
use crate::domain::{errors::DomainResult, market::Source, pagination::QueryOf};
use async_trait::async_trait;

#[async_trait]
pub trait PackageRepository: Send + Sync {
    /// Fails with `NotFound(Product)` when the owning product does not exist.
    async fn insert(&self, package: NewPackage) -> DomainResult<Package>;
    async fn list(&self, query: QueryOf<PackageListing>) -> DomainResult<Vec<Package>>;
    async fn delete(&self, id: PackageId) -> DomainResult<()>;
    /// Connect a native package to this package.
    async fn pair(&self, id: PackageId, native_package_id: &str, source: Source) -> DomainResult<()>;
}
