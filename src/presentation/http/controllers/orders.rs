// src/presentation/http/controllers/orders.rs
use crate::application::{dto::OrderDto, services::orders::ListOrdersParams};
use crate::domain::{order::OrderId, pagination::Page};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ListQuery, PathId};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/v1/orders/{id}",
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 200, body = OrderDto),
        (status = 404, description = "OrderNotFound", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn get_order(
    Extension(state): Extension<HttpState>,
    PathId(id): PathId<i64>,
) -> HttpResult<Json<OrderDto>> {
    state
        .services
        .orders
        .get_order(OrderId(id))
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/orders",
    params(
        ("nextKey" = Option<String>, Query, description = "Token from a previous page; other parameters are ignored when present"),
        ListOrdersParams
    ),
    responses(
        (status = 200, body = Page<OrderDto>),
        (status = 400, description = "InvalidArgument or InvalidNextKey", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    Extension(state): Extension<HttpState>,
    ListQuery(request): ListQuery<ListOrdersParams>,
) -> HttpResult<Json<Page<OrderDto>>> {
    state
        .services
        .orders
        .list_orders(request)
        .await
        .into_http()
        .map(Json)
}
