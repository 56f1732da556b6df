// src/infrastructure/repositories/postgres_native_product.rs
use super::{
    error::parse_column,
    map_sqlx,
    paging::{push_contains, push_order_by, push_window},
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::native_product::{
    NativePackage, NativeProduct, NativeProductListing, NativeProductRepository,
};
use crate::domain::package::PackageId;
use crate::domain::pagination::QueryOf;
use crate::domain::product::ProductId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::collections::HashMap;

#[derive(Clone)]
pub struct PostgresNativeProductRepository {
    pool: PgPool,
}

impl PostgresNativeProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn packages_of(
        &self,
        products: &[NativeProduct],
    ) -> DomainResult<HashMap<(String, String), Vec<NativePackage>>> {
        let ids: Vec<&str> = products.iter().map(|product| product.id.as_str()).collect();
        let sources: Vec<&str> = products.iter().map(|product| product.source.as_str()).collect();

        let rows = sqlx::query_as::<_, NativePackageRow>(
            "SELECT id, source, native_product_id, name, region, package_id, created_at, updated_at
             FROM native_packages
             WHERE (native_product_id, source) IN (SELECT * FROM UNNEST($1::text[], $2::text[]))
             ORDER BY created_at DESC, id DESC",
        )
        .bind(ids)
        .bind(sources)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut grouped: HashMap<(String, String), Vec<NativePackage>> = HashMap::new();
        for row in rows {
            let owner = (row.native_product_id.clone(), row.source.clone());
            grouped
                .entry(owner)
                .or_default()
                .push(NativePackage::try_from(row)?);
        }
        Ok(grouped)
    }
}

#[derive(Debug, FromRow)]
struct NativeProductRow {
    id: String,
    source: String,
    name: String,
    region: String,
    product_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<NativeProductRow> for NativeProduct {
    type Error = DomainError;

    fn try_from(row: NativeProductRow) -> Result<Self, Self::Error> {
        Ok(NativeProduct {
            id: row.id,
            name: row.name,
            source: parse_column("source", &row.source)?,
            region: parse_column("region", &row.region)?,
            packages: Vec::new(),
            product_id: row.product_id.map(ProductId),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct NativePackageRow {
    id: String,
    source: String,
    native_product_id: String,
    name: String,
    region: String,
    package_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<NativePackageRow> for NativePackage {
    type Error = DomainError;

    fn try_from(row: NativePackageRow) -> Result<Self, Self::Error> {
        Ok(NativePackage {
            id: row.id,
            name: row.name,
            source: parse_column("source", &row.source)?,
            region: parse_column("region", &row.region)?,
            package_id: row.package_id.map(PackageId),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl NativeProductRepository for PostgresNativeProductRepository {
    async fn list(&self, query: QueryOf<NativeProductListing>) -> DomainResult<Vec<NativeProduct>> {
        let filters = &query.filters;
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT n.id, n.source, n.name, n.region, n.product_id, n.created_at, n.updated_at
             FROM native_products n WHERE n.region = ",
        );
        builder.push_bind(filters.region.as_str());
        if let Some(name) = &filters.name {
            push_contains(&mut builder, "n.name", name);
        }
        if let Some(product_id) = filters.product_id {
            builder.push(" AND n.product_id = ");
            builder.push_bind(product_id.0);
        }
        if filters.no_product_id {
            builder.push(" AND n.product_id IS NULL");
        }
        if let Some(source) = filters.source {
            builder.push(" AND n.source = ");
            builder.push_bind(source.as_str());
        }
        push_order_by(&mut builder, "n", &query.sort);
        push_window(&mut builder, &query.start, query.limit_i64());

        let rows = builder
            .build_query_as::<NativeProductRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut products = rows
            .into_iter()
            .map(NativeProduct::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        if products.is_empty() {
            return Ok(products);
        }

        let mut packages = self.packages_of(&products).await?;
        for product in &mut products {
            let owner = (product.id.clone(), product.source.as_str().to_owned());
            product.packages = packages.remove(&owner).unwrap_or_default();
        }
        Ok(products)
    }
}
