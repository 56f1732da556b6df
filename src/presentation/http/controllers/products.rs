// src/presentation/http/controllers/products.rs
use crate::application::{
    dto::ProductDto,
    services::products::{
        CreateProductCommand, GetProductParams, LinkNativeProductCommand, ListProductsParams,
        UpdateProductCommand,
    },
};
use crate::domain::{
    market::{Region, Source},
    pagination::Page,
    product::ProductId,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ListQuery, PathId, QueryParams};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub name: String,
    pub region: Region,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub region: Option<Region>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LinkNativeProductRequest {
    pub native_product_id: String,
    pub source: Source,
}

impl From<LinkNativeProductRequest> for LinkNativeProductCommand {
    fn from(payload: LinkNativeProductRequest) -> Self {
        Self {
            native_product_id: payload.native_product_id,
            source: payload.source,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    params(("id" = i64, Path, description = "Product id"), GetProductParams),
    responses(
        (status = 200, body = ProductDto),
        (status = 404, description = "ProductNotFound", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn get_product(
    Extension(state): Extension<HttpState>,
    PathId(id): PathId<i64>,
    QueryParams(params): QueryParams<GetProductParams>,
) -> HttpResult<Json<ProductDto>> {
    state
        .services
        .products
        .get_product(ProductId(id), params)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, body = ProductDto),
        (status = 400, body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn create_product(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateProductRequest>,
) -> HttpResult<(StatusCode, Json<ProductDto>)> {
    let command = CreateProductCommand {
        name: payload.name,
        region: payload.region,
    };

    state
        .services
        .products
        .create_product(command)
        .await
        .into_http()
        .map(|product| (StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    get,
    path = "/api/v1/products",
    params(
        ("nextKey" = Option<String>, Query, description = "Token from a previous page; other parameters are ignored when present"),
        ListProductsParams
    ),
    responses(
        (status = 200, body = Page<ProductDto>),
        (status = 400, description = "InvalidArgument or InvalidNextKey", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn list_products(
    Extension(state): Extension<HttpState>,
    ListQuery(request): ListQuery<ListProductsParams>,
) -> HttpResult<Json<Page<ProductDto>>> {
    state
        .services
        .products
        .list_products(request)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    request_body = UpdateProductRequest,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, body = ErrorResponse),
        (status = 404, description = "ProductNotFound", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn update_product(
    Extension(state): Extension<HttpState>,
    PathId(id): PathId<i64>,
    Json(payload): Json<UpdateProductRequest>,
) -> HttpResult<StatusCode> {
    let command = UpdateProductCommand {
        name: payload.name,
        region: payload.region,
    };

    state
        .services
        .products
        .update_product(ProductId(id), command)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "ProductNotFound", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn delete_product(
    Extension(state): Extension<HttpState>,
    PathId(id): PathId<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .products
        .delete_product(ProductId(id))
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/v1/products/{id}/link",
    params(("id" = i64, Path, description = "Product id")),
    request_body = LinkNativeProductRequest,
    responses(
        (status = 204, description = "Linked"),
        (status = 404, description = "ProductNotFound or NativeProductNotFound", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn link_product(
    Extension(state): Extension<HttpState>,
    PathId(id): PathId<i64>,
    Json(payload): Json<LinkNativeProductRequest>,
) -> HttpResult<StatusCode> {
    state
        .services
        .products
        .link_product(ProductId(id), payload.into())
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/v1/products/{id}/unlink",
    params(("id" = i64, Path, description = "Product id")),
    request_body = LinkNativeProductRequest,
    responses(
        (status = 204, description = "Unlinked"),
        (status = 404, description = "ProductNotFound or NativeProductNotFound", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn unlink_product(
    Extension(state): Extension<HttpState>,
    PathId(id): PathId<i64>,
    Json(payload): Json<LinkNativeProductRequest>,
) -> HttpResult<StatusCode> {
    state
        .services
        .products
        .unlink_product(ProductId(id), payload.into())
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
