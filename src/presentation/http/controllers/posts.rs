// src/presentation/http/controllers/posts.rs
use crate::application::{
    dto::PostDto,
    services::posts::{CreatePostCommand, GetPostParams, ListPostsParams},
};
use crate::domain::{pagination::Page, post::PostId};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, ListQuery, PathId, QueryParams};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}",
    params(("id" = Uuid, Path, description = "Post id"), GetPostParams),
    responses(
        (status = 200, body = PostDto),
        (status = 400, body = ErrorResponse),
        (status = 404, description = "PostNotFound", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn get_post(
    Extension(state): Extension<HttpState>,
    PathId(id): PathId<Uuid>,
    QueryParams(params): QueryParams<GetPostParams>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .posts
        .get_post(PostId(id), params)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, body = PostDto),
        (status = 400, body = ErrorResponse),
        (status = 401, body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreatePostRequest>,
) -> HttpResult<(StatusCode, Json<PostDto>)> {
    let command = CreatePostCommand {
        title: payload.title,
        content: payload.content,
    };

    state
        .services
        .posts
        .create_post(&user, command)
        .await
        .into_http()
        .map(|post| (StatusCode::CREATED, Json(post)))
}

#[utoipa::path(
    get,
    path = "/api/v1/posts",
    params(
        ("nextKey" = Option<String>, Query, description = "Token from a previous page; other parameters are ignored when present"),
        ListPostsParams
    ),
    responses(
        (status = 200, body = Page<PostDto>),
        (status = 400, description = "InvalidArgument or InvalidNextKey", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    ListQuery(request): ListQuery<ListPostsParams>,
) -> HttpResult<Json<Page<PostDto>>> {
    state
        .services
        .posts
        .list_posts(request)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/posts/{id}",
    params(("id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 204, description = "No content"),
        (status = 401, body = ErrorResponse),
        (status = 403, description = "NoPermission", body = ErrorResponse),
        (status = 404, description = "PostNotFound", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathId(id): PathId<Uuid>,
) -> HttpResult<StatusCode> {
    state
        .services
        .posts
        .delete_post(&user, PostId(id))
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    put,
    path = "/api/v1/posts/like/{id}",
    params(("id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 204, description = "No content"),
        (status = 401, body = ErrorResponse),
        (status = 404, description = "PostNotFound", body = ErrorResponse),
        (status = 409, description = "PostAlreadyLiked", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn like_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathId(id): PathId<Uuid>,
) -> HttpResult<StatusCode> {
    state
        .services
        .posts
        .like_post(&user, PostId(id))
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/v1/posts/like/{id}",
    params(("id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 204, description = "No content"),
        (status = 401, body = ErrorResponse),
        (status = 404, description = "PostNotFound", body = ErrorResponse),
        (status = 409, description = "PostNotLiked", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn unlike_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathId(id): PathId<Uuid>,
) -> HttpResult<StatusCode> {
    state
        .services
        .posts
        .unlike_post(&user, PostId(id))
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
