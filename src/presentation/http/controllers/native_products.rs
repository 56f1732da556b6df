// src/presentation/http/controllers/native_products.rs
use crate::application::{
    dto::NativeProductDto, services::native_products::ListNativeProductsParams,
};
use crate::domain::pagination::Page;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ListQuery;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/v1/native-products",
    params(
        ("nextKey" = Option<String>, Query, description = "Token from a previous page; other parameters are ignored when present"),
        ListNativeProductsParams
    ),
    responses(
        (status = 200, body = Page<NativeProductDto>),
        (status = 400, description = "InvalidArgument or InvalidNextKey", body = ErrorResponse)
    ),
    tag = "Native Products"
)]
pub async fn list_native_products(
    Extension(state): Extension<HttpState>,
    ListQuery(request): ListQuery<ListNativeProductsParams>,
) -> HttpResult<Json<Page<NativeProductDto>>> {
    state
        .services
        .native_products
        .list_native_products(request)
        .await
        .into_http()
        .map(Json)
}
