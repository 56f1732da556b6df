// src/domain/native_product/entity.rs
//! Catalogue records imported from upstream booking platforms. They are keyed
//! by `(id, source)` and may be linked to one of our products or packages.
use crate::domain::{
    market::{Region, Source},
    package::PackageId,
    product::ProductId,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct NativePackage {
    pub id: String,
    pub name: String,
    pub source: Source,
    pub region: Region,
    pub package_id: Option<PackageId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NativeProduct {
    pub id: String,
    pub name: String,
    pub source: Source,
    pub region: Region,
    pub packages: Vec<NativePackage>,
    pub product_id: Option<ProductId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
