// src/infrastructure/repositories/postgres_catalogue.rs
use super::{
    error::parse_column,
    map_sqlx,
    paging::{push_after_key, push_order_by, push_window},
};
use crate::domain::errors::{DomainError, DomainResult, Entity};
use crate::domain::market::Source;
use crate::domain::package::{
    NewPackage, Package, PackageId, PackageListing, PackageRepository,
};
use crate::domain::pagination::{PageStart, QueryOf};
use crate::domain::product::{
    NewProduct, Product, ProductId, ProductListing, ProductPatch, ProductRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::collections::HashMap;

#[derive(Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn packages_of(&self, product_ids: &[i64]) -> DomainResult<HashMap<i64, Vec<Package>>> {
        let rows = sqlx::query_as::<_, PackageRow>(
            "SELECT id, name, region, product_id, created_at, updated_at
             FROM packages WHERE product_id = ANY($1) ORDER BY id ASC",
        )
        .bind(product_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut grouped: HashMap<i64, Vec<Package>> = HashMap::new();
        for row in rows {
            let product_id = row.product_id;
            grouped
                .entry(product_id)
                .or_default()
                .push(Package::try_from(row)?);
        }
        Ok(grouped)
    }

    async fn attach_packages(&self, products: &mut [Product]) -> DomainResult<()> {
        let ids: Vec<i64> = products.iter().map(|product| product.id.0).collect();
        let mut grouped = self.packages_of(&ids).await?;
        for product in products.iter_mut() {
            product.packages = Some(grouped.remove(&product.id.0).unwrap_or_default());
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct PostgresPackageRepository {
    pool: PgPool,
}

impl PostgresPackageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    region: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = DomainError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(Product {
            id: ProductId(row.id),
            name: row.name,
            region: parse_column("region", &row.region)?,
            packages: None,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct PackageRow {
    id: i64,
    name: String,
    region: String,
    product_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PackageRow> for Package {
    type Error = DomainError;

    fn try_from(row: PackageRow) -> Result<Self, Self::Error> {
        Ok(Package {
            id: PackageId(row.id),
            name: row.name,
            region: parse_column("region", &row.region)?,
            product_id: ProductId(row.product_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn find_by_id(&self, id: ProductId, with_packages: bool) -> DomainResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, region, created_at, updated_at FROM products WHERE id = $1",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let Some(row) = row else {
            return Ok(None);
        };
        let mut product = Product::try_from(row)?;
        if with_packages {
            self.attach_packages(std::slice::from_mut(&mut product)).await?;
        }
        Ok(Some(product))
    }

    async fn insert(&self, product: NewProduct) -> DomainResult<Product> {
        let NewProduct {
            name,
            region,
            created_at,
        } = product;

        let row = sqlx::query_as::<_, ProductRow>(
            "INSERT INTO products (name, region, created_at, updated_at)
             VALUES ($1, $2, $3, $3)
             RETURNING id, name, region, created_at, updated_at",
        )
        .bind(name)
        .bind(region.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Product::try_from(row)
    }

    async fn list(&self, query: QueryOf<ProductListing>) -> DomainResult<Vec<Product>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT p.id, p.name, p.region, p.created_at, p.updated_at FROM products p WHERE p.region = ",
        );
        builder.push_bind(query.filters.region.as_str());
        if let PageStart::AfterKey(anchor) = &query.start {
            push_after_key(&mut builder, "p", "products", &query.sort, anchor.0)?;
        }
        push_order_by(&mut builder, "p", &query.sort);
        push_window(&mut builder, &query.start, query.limit_i64());

        let rows = builder
            .build_query_as::<ProductRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut products = rows
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        if query.filters.with_packages && !products.is_empty() {
            self.attach_packages(&mut products).await?;
        }
        Ok(products)
    }

    async fn update(&self, id: ProductId, patch: ProductPatch) -> DomainResult<()> {
        let ProductPatch {
            name,
            region,
            updated_at,
        } = patch;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE products SET updated_at = ");
        builder.push_bind(updated_at);
        if let Some(name) = name {
            builder.push(", name = ");
            builder.push_bind(name);
        }
        if let Some(region) = region {
            builder.push(", region = ");
            builder.push_bind(region.as_str());
        }
        builder.push(" WHERE id = ");
        builder.push_bind(id.0);

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(Entity::Product));
        }
        Ok(())
    }

    async fn delete(&self, id: ProductId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(Entity::Product));
        }
        Ok(())
    }

    async fn link(&self, id: ProductId, native_product_id: &str, source: Source) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE native_products SET product_id = $1, updated_at = NOW()
             WHERE id = $2 AND source = $3",
        )
        .bind(id.0)
        .bind(native_product_id)
        .bind(source.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(Entity::NativeProduct));
        }
        Ok(())
    }

    async fn unlink(&self, id: ProductId, native_product_id: &str, source: Source) -> DomainResult<()> {
        let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM products WHERE id = $1")
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if exists.is_none() {
            return Err(DomainError::NotFound(Entity::Product));
        }

        // Only a record linked to this product can be unlinked from it.
        let result = sqlx::query(
            "UPDATE native_products SET product_id = NULL, updated_at = NOW()
             WHERE id = $1 AND source = $2 AND product_id = $3",
        )
        .bind(native_product_id)
        .bind(source.as_str())
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(Entity::NativeProduct));
        }
        Ok(())
    }
}

#[async_trait]
impl PackageRepository for PostgresPackageRepository {
    async fn insert(&self, package: NewPackage) -> DomainResult<Package> {
        let NewPackage {
            name,
            region,
            product_id,
            created_at,
        } = package;

        let row = sqlx::query_as::<_, PackageRow>(
            "INSERT INTO packages (name, region, product_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $4)
             RETURNING id, name, region, product_id, created_at, updated_at",
        )
        .bind(name)
        .bind(region.as_str())
        .bind(product_id.0)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Package::try_from(row)
    }

    async fn list(&self, query: QueryOf<PackageListing>) -> DomainResult<Vec<Package>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT k.id, k.name, k.region, k.product_id, k.created_at, k.updated_at
             FROM packages k WHERE k.region = ",
        );
        builder.push_bind(query.filters.region.as_str());
        if let Some(product_id) = query.filters.product_id {
            builder.push(" AND k.product_id = ");
            builder.push_bind(product_id.0);
        }
        if let PageStart::AfterKey(anchor) = &query.start {
            push_after_key(&mut builder, "k", "packages", &query.sort, anchor.0)?;
        }
        push_order_by(&mut builder, "k", &query.sort);
        push_window(&mut builder, &query.start, query.limit_i64());

        let rows = builder
            .build_query_as::<PackageRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Package::try_from).collect()
    }

    async fn delete(&self, id: PackageId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM packages WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(Entity::Package));
        }
        Ok(())
    }

    async fn pair(&self, id: PackageId, native_package_id: &str, source: Source) -> DomainResult<()> {
        // A missing package surfaces through the foreign key.
        let result = sqlx::query(
            "UPDATE native_packages SET package_id = $1, updated_at = NOW()
             WHERE id = $2 AND source = $3",
        )
        .bind(id.0)
        .bind(native_package_id)
        .bind(source.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(Entity::NativePackage));
        }
        Ok(())
    }
}
