// src/application/services/packages.rs
use std::sync::Arc;

use crate::{
    application::{ApplicationResult, dto::PackageDto, listing, ports::time::Clock},
    domain::{
        market::{Region, Source},
        package::{NewPackage, PackageFilters, PackageId, PackageListing, PackageRepository},
        pagination::{IntoRawList, KeysetCursor, ListRequest, Page, RawList},
        product::ProductId,
    },
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct ListPackagesParams {
    /// Page size, 1 to 40. Defaults to 30.
    pub limit: Option<u64>,
    #[param(inline)]
    pub region: Region,
    pub product_id: Option<i64>,
}

impl IntoRawList<PackageFilters, KeysetCursor<PackageId>> for ListPackagesParams {
    fn into_raw(self) -> RawList<PackageFilters, KeysetCursor<PackageId>> {
        RawList::new(
            PackageFilters {
                region: self.region,
                product_id: self.product_id.map(ProductId),
            },
            self.limit,
        )
    }
}

pub struct CreatePackageCommand {
    pub name: String,
    pub region: Region,
    pub product_id: ProductId,
}

pub struct PairNativePackageCommand {
    pub native_package_id: String,
    pub source: Source,
}

pub struct PackageService {
    packages: Arc<dyn PackageRepository>,
    clock: Arc<dyn Clock>,
}

impl PackageService {
    pub fn new(packages: Arc<dyn PackageRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { packages, clock }
    }

    pub async fn create_package(&self, command: CreatePackageCommand) -> ApplicationResult<PackageDto> {
        let new_package = NewPackage::new(
            command.name,
            command.region,
            command.product_id,
            self.clock.now(),
        )?;
        let package = self.packages.insert(new_package).await?;
        tracing::info!(package_id = package.id.0, product_id = package.product_id.0, "package created");
        Ok(package.into())
    }

    pub async fn list_packages(
        &self,
        request: ListRequest<ListPackagesParams>,
    ) -> ApplicationResult<Page<PackageDto>> {
        let (options, query) = listing::plan::<PackageListing, _>(request)?;
        let packages = self.packages.list(query).await?;
        listing::finish::<PackageListing, _>(&options, packages, PackageDto::from)
    }

    pub async fn delete_package(&self, id: PackageId) -> ApplicationResult<()> {
        self.packages.delete(id).await?;
        tracing::info!(package_id = id.0, "package deleted");
        Ok(())
    }

    pub async fn pair_package(
        &self,
        id: PackageId,
        command: PairNativePackageCommand,
    ) -> ApplicationResult<()> {
        self.packages
            .pair(id, &command.native_package_id, command.source)
            .await?;
        tracing::info!(
            package_id = id.0,
            native_package_id = %command.native_package_id,
            source = %command.source,
            "native package paired"
        );
        Ok(())
    }
}
