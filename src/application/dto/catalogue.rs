// src/application/dto/catalogue.rs
use crate::domain::{
    market::{Region, Source},
    native_product::{NativePackage, NativeProduct},
    package::Package,
    product::Product,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i64,
    pub name: String,
    pub region: Region,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packages: Option<Vec<PackageDto>>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.into(),
            name: product.name,
            region: product.region,
            packages: product
                .packages
                .map(|packages| packages.into_iter().map(PackageDto::from).collect()),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PackageDto {
    pub id: i64,
    pub name: String,
    pub region: Region,
    pub product_id: i64,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Package> for PackageDto {
    fn from(package: Package) -> Self {
        Self {
            id: package.id.into(),
            name: package.name,
            region: package.region,
            product_id: package.product_id.into(),
            created_at: package.created_at,
            updated_at: package.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NativeProductDto {
    pub id: String,
    pub name: String,
    pub source: Source,
    pub region: Region,
    pub packages: Vec<NativePackageDto>,
    pub product_id: Option<i64>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<NativeProduct> for NativeProductDto {
    fn from(native: NativeProduct) -> Self {
        Self {
            id: native.id,
            name: native.name,
            source: native.source,
            region: native.region,
            packages: native.packages.into_iter().map(Into::into).collect(),
            product_id: native.product_id.map(i64::from),
            created_at: native.created_at,
            updated_at: native.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NativePackageDto {
    pub id: String,
    pub name: String,
    pub source: Source,
    pub region: Region,
    pub package_id: Option<i64>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<NativePackage> for NativePackageDto {
    fn from(native: NativePackage) -> Self {
        Self {
            id: native.id,
            name: native.name,
            source: native.source,
            region: native.region,
            package_id: native.package_id.map(i64::from),
            created_at: native.created_at,
            updated_at: native.updated_at,
        }
    }
}
