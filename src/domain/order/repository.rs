// src/domain/order/repository.rs
use super::entity::{Order, OrderId, OrderListing};
use crate::domain::{errors::DomainResult, pagination::QueryOf};
use async_trait::async_trait;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn find_by_id(&self, id: OrderId) -> DomainResult<Option<Order>>;
    async fn list(&self, query: QueryOf<OrderListing>) -> DomainResult<Vec<Order>>;
}
