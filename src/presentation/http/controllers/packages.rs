// src/presentation/http/controllers/packages.rs
use crate::application::{
    dto::PackageDto,
    services::packages::{CreatePackageCommand, ListPackagesParams, PairNativePackageCommand},
};
use crate::domain::{
    market::{Region, Source},
    package::PackageId,
    pagination::Page,
    product::ProductId,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ListQuery, PathId};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePackageRequest {
    pub name: String,
    pub region: Region,
    pub product_id: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PairNativePackageRequest {
    pub native_package_id: String,
    pub source: Source,
}

#[utoipa::path(
    post,
    path = "/api/v1/packages",
    request_body = CreatePackageRequest,
    responses(
        (status = 201, body = PackageDto),
        (status = 400, body = ErrorResponse),
        (status = 404, description = "ProductNotFound", body = ErrorResponse)
    ),
    tag = "Packages"
)]
pub async fn create_package(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreatePackageRequest>,
) -> HttpResult<(StatusCode, Json<PackageDto>)> {
    let command = CreatePackageCommand {
        name: payload.name,
        region: payload.region,
        product_id: ProductId(payload.product_id),
    };

    state
        .services
        .packages
        .create_package(command)
        .await
        .into_http()
        .map(|package| (StatusCode::CREATED, Json(package)))
}

#[utoipa::path(
    get,
    path = "/api/v1/packages",
    params(
        ("nextKey" = Option<String>, Query, description = "Token from a previous page; other parameters are ignored when present"),
        ListPackagesParams
    ),
    responses(
        (status = 200, body = Page<PackageDto>),
        (status = 400, description = "InvalidArgument or InvalidNextKey", body = ErrorResponse)
    ),
    tag = "Packages"
)]
pub async fn list_packages(
    Extension(state): Extension<HttpState>,
    ListQuery(request): ListQuery<ListPackagesParams>,
) -> HttpResult<Json<Page<PackageDto>>> {
    state
        .services
        .packages
        .list_packages(request)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/packages/{id}",
    params(("id" = i64, Path, description = "Package id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "PackageNotFound", body = ErrorResponse)
    ),
    tag = "Packages"
)]
pub async fn delete_package(
    Extension(state): Extension<HttpState>,
    PathId(id): PathId<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .packages
        .delete_package(PackageId(id))
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/v1/packages/{id}/pair",
    params(("id" = i64, Path, description = "Package id")),
    request_body = PairNativePackageRequest,
    responses(
        (status = 204, description = "Paired"),
        (status = 404, description = "PackageNotFound or NativePackageNotFound", body = ErrorResponse)
    ),
    tag = "Packages"
)]
pub async fn pair_package(
    Extension(state): Extension<HttpState>,
    PathId(id): PathId<i64>,
    Json(payload): Json<PairNativePackageRequest>,
) -> HttpResult<StatusCode> {
    let command = PairNativePackageCommand {
        native_package_id: payload.native_package_id,
        source: payload.source,
    };

    state
        .services
        .packages
        .pair_package(PackageId(id), command)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
