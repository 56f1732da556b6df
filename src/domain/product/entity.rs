// src/domain/product/entity.rs
use crate::domain::{
    errors::{DomainError, DomainResult},
    market::Region,
    package::Package,
    pagination::CursorKey,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl From<ProductId> for i64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub region: Region,
    /// Only loaded when requested.
    pub packages: Option<Vec<Package>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CursorKey for Product {
    type Key = ProductId;

    fn cursor_key(&self) -> ProductId {
        self.id
    }
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub region: Region,
    pub created_at: DateTime<Utc>,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, region: Region, created_at: DateTime<Utc>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::Validation("product name cannot be empty".into()));
        }
        Ok(Self {
            name,
            region,
            created_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub region: Option<Region>,
    pub updated_at: DateTime<Utc>,
}

impl ProductPatch {
    pub fn new(updated_at: DateTime<Utc>) -> Self {
        Self {
            name: None,
            region: None,
            updated_at,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::Validation("product name cannot be empty".into()));
        }
        self.name = Some(name);
        Ok(self)
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.region.is_none()
    }
}
