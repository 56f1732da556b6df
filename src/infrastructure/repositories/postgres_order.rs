// src/infrastructure/repositories/postgres_order.rs
use super::{
    error::parse_column,
    map_sqlx,
    paging::{push_after_key, push_order_by, push_window},
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::order::{Customer, LinkedItem, Order, OrderId, OrderListing, OrderRepository};
use crate::domain::pagination::{PageStart, QueryOf};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

// Product and package names come from our catalogue when the native record
// is linked, otherwise from the native record itself.
const ORDER_SELECT: &str = "SELECT o.id, o.status, o.quantity, o.customer_name, o.customer_email,
        o.booked_at, o.departure_at, o.native_id, o.source, o.region, o.created_at, o.updated_at,
        p.id AS product_id, p.name AS product_name, np.name AS native_product_name,
        k.id AS package_id, k.name AS package_name, nk.name AS native_package_name
    FROM orders o
    JOIN native_products np ON np.id = o.native_product_id AND np.source = o.source
    JOIN native_packages nk ON nk.id = o.native_package_id AND nk.source = o.source
    LEFT JOIN products p ON p.id = np.product_id
    LEFT JOIN packages k ON k.id = nk.package_id";

#[derive(Clone)]
pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct OrderRow {
    id: i64,
    status: String,
    quantity: i32,
    customer_name: String,
    customer_email: String,
    booked_at: DateTime<Utc>,
    departure_at: DateTime<Utc>,
    native_id: String,
    source: String,
    region: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    product_id: Option<i64>,
    product_name: Option<String>,
    native_product_name: String,
    package_id: Option<i64>,
    package_name: Option<String>,
    native_package_name: String,
}

impl TryFrom<OrderRow> for Order {
    type Error = DomainError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        Ok(Order {
            id: OrderId(row.id),
            status: row.status,
            quantity: row.quantity,
            customer: Customer {
                name: row.customer_name,
                email: row.customer_email,
            },
            booked_at: row.booked_at,
            departure_at: row.departure_at,
            native_id: row.native_id,
            product: LinkedItem::resolve(row.product_id, row.product_name, row.native_product_name),
            package: LinkedItem::resolve(row.package_id, row.package_name, row.native_package_name),
            source: parse_column("source", &row.source)?,
            region: parse_column("region", &row.region)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn find_by_id(&self, id: OrderId) -> DomainResult<Option<Order>> {
        let row = sqlx::query_as::<_, OrderRow>(&format!("{ORDER_SELECT} WHERE o.id = $1"))
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Order::try_from).transpose()
    }

    async fn list(&self, query: QueryOf<OrderListing>) -> DomainResult<Vec<Order>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("{ORDER_SELECT} WHERE o.region = "));
        builder.push_bind(query.filters.region.as_str());
        if let PageStart::AfterKey(anchor) = &query.start {
            push_after_key(&mut builder, "o", "orders", &query.sort, anchor.0)?;
        }
        push_order_by(&mut builder, "o", &query.sort);
        push_window(&mut builder, &query.start, query.limit_i64());

        let rows = builder
            .build_query_as::<OrderRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Order::try_from).collect()
    }
}
