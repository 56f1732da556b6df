// src/application/dto/orders.rs
use crate::domain::{
    market::{Region, Source},
    order::{Customer, LinkedItem, Order},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CustomerDto {
    pub name: String,
    pub email: String,
}

impl From<Customer> for CustomerDto {
    fn from(customer: Customer) -> Self {
        Self {
            name: customer.name,
            email: customer.email,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LinkedItemDto {
    pub id: Option<i64>,
    pub name: String,
}

impl From<LinkedItem> for LinkedItemDto {
    fn from(item: LinkedItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: i64,
    pub status: String,
    pub quantity: i32,
    pub customer: CustomerDto,
    #[serde(with = "serde_time")]
    pub booked_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub departure_at: DateTime<Utc>,
    pub native_id: String,
    pub product: LinkedItemDto,
    pub package: LinkedItemDto,
    pub source: Source,
    pub region: Region,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Order> for OrderDto {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.into(),
            status: order.status,
            quantity: order.quantity,
            customer: order.customer.into(),
            booked_at: order.booked_at,
            departure_at: order.departure_at,
            native_id: order.native_id,
            product: order.product.into(),
            package: order.package.into(),
            source: order.source,
            region: order.region,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}
