// src/domain/package/entity.rs
use crate::domain::{
    errors::{DomainError, DomainResult},
    market::Region,
    pagination::CursorKey,
    product::ProductId,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageId(pub i64);

impl From<PackageId> for i64 {
    fn from(value: PackageId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub id: PackageId,
    pub name: String,
    pub region: Region,
    pub product_id: ProductId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CursorKey for Package {
    type Key = PackageId;

    fn cursor_key(&self) -> PackageId {
        self.id
    }
}

#[derive(Debug, Clone)]
pub struct NewPackage {
    pub name: String,
    pub region: Region,
    pub product_id: ProductId,
    pub created_at: DateTime<Utc>,
}

impl NewPackage {
    pub fn new(
        name: impl Into<String>,
        region: Region,
        product_id: ProductId,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::Validation("package name cannot be empty".into()));
        }
        Ok(Self {
            name,
            region,
            product_id,
            created_at,
        })
    }
}
