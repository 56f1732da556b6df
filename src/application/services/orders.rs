// src/application/services/orders.rs
use std::sync::Arc;

use crate::{
    application::{ApplicationError, ApplicationResult, dto::OrderDto, listing},
    domain::{
        market::Region,
        order::{OrderFilters, OrderId, OrderListing, OrderRepository},
        pagination::{IntoRawList, KeysetCursor, ListRequest, Page, RawList},
    },
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListOrdersParams {
    /// Page size, 1 to 40. Defaults to 30.
    pub limit: Option<u64>,
    #[param(inline)]
    pub region: Region,
}

impl IntoRawList<OrderFilters, KeysetCursor<OrderId>> for ListOrdersParams {
    fn into_raw(self) -> RawList<OrderFilters, KeysetCursor<OrderId>> {
        RawList::new(
            OrderFilters {
                region: self.region,
            },
            self.limit,
        )
    }
}

pub struct OrderService {
    orders: Arc<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(orders: Arc<dyn OrderRepository>) -> Self {
        Self { orders }
    }

    pub async fn get_order(&self, id: OrderId) -> ApplicationResult<OrderDto> {
        self.orders
            .find_by_id(id)
            .await?
            .map(OrderDto::from)
            .ok_or(ApplicationError::OrderNotFound)
    }

    pub async fn list_orders(
        &self,
        request: ListRequest<ListOrdersParams>,
    ) -> ApplicationResult<Page<OrderDto>> {
        let (options, query) = listing::plan::<OrderListing, _>(request)?;
        let orders = self.orders.list(query).await?;
        listing::finish::<OrderListing, _>(&options, orders, OrderDto::from)
    }
}
