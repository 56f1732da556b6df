// src/domain/order/entity.rs
use crate::domain::{
    market::{Region, Source},
    pagination::{CursorKey, FilterRules, KeysetCursor, Listing, PageLimit, SortSpec},
    product::listing::ID_ASC_KEYS,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub i64);

impl From<OrderId> for i64 {
    fn from(value: OrderId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
}

/// Catalogue item an order was booked against. `id` is absent while the
/// native record is not linked to one of our products or packages, and
/// `name` then falls back to the native name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedItem {
    pub id: Option<i64>,
    pub name: String,
}

impl LinkedItem {
    pub fn resolve(id: Option<i64>, linked_name: Option<String>, native_name: String) -> Self {
        Self {
            id,
            name: linked_name.unwrap_or(native_name),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub status: String,
    pub quantity: i32,
    pub customer: Customer,
    pub booked_at: DateTime<Utc>,
    pub departure_at: DateTime<Utc>,
    pub native_id: String,
    pub product: LinkedItem,
    pub package: LinkedItem,
    pub source: Source,
    pub region: Region,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CursorKey for Order {
    type Key = OrderId;

    fn cursor_key(&self) -> OrderId {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderFilters {
    pub region: Region,
}

impl FilterRules for OrderFilters {}

pub struct OrderListing;

impl Listing for OrderListing {
    type Filters = OrderFilters;
    type Cursor = KeysetCursor<OrderId>;
    type Record = Order;

    const NAME: &'static str = "orders";
    const DEFAULT_LIMIT: PageLimit = PageLimit::from_const(30);

    fn sort(_: &OrderFilters) -> SortSpec {
        SortSpec::new(ID_ASC_KEYS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linked_name_wins_over_native_name() {
        let item = LinkedItem::resolve(Some(3), Some("Day Tour".into()), "KK-123 tour".into());
        assert_eq!(item.name, "Day Tour");
        let item = LinkedItem::resolve(None, None, "KK-123 tour".into());
        assert_eq!(item, LinkedItem { id: None, name: "KK-123 tour".into() });
    }
}
