// src/presentation/http/controllers/comments.rs
use crate::application::{
    dto::CommentDto,
    services::comments::{CreateCommentCommand, ListCommentsParams},
};
use crate::domain::{comment::CommentId, pagination::Page, post::PostId};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, ListQuery, PathId};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub content: String,
    pub post_id: Uuid,
    /// Reply to this top-level comment.
    #[serde(default)]
    pub parent_id: Option<Uuid>,
}

#[utoipa::path(
    post,
    path = "/api/v1/comments",
    request_body = CreateCommentRequest,
    responses(
        (status = 201, body = CommentDto),
        (status = 401, body = ErrorResponse),
        (status = 404, description = "PostNotFound or CommentNotFound", body = ErrorResponse),
        (status = 409, description = "CommentOnSubcomment or ParentCommentNotMatchWithPost", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    let command = CreateCommentCommand {
        content: payload.content,
        post_id: PostId(payload.post_id),
        parent_id: payload.parent_id.map(CommentId),
    };

    state
        .services
        .comments
        .create_comment(&user, command)
        .await
        .into_http()
        .map(|comment| (StatusCode::CREATED, Json(comment)))
}

#[utoipa::path(
    get,
    path = "/api/v1/comments",
    params(
        ("nextKey" = Option<String>, Query, description = "Token from a previous page; other parameters are ignored when present"),
        ListCommentsParams
    ),
    responses(
        (status = 200, body = Page<CommentDto>),
        (status = 400, description = "InvalidArgument or InvalidNextKey", body = ErrorResponse),
        (status = 404, description = "PostNotFound", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    ListQuery(request): ListQuery<ListCommentsParams>,
) -> HttpResult<Json<Page<CommentDto>>> {
    state
        .services
        .comments
        .list_comments(request)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/comments/{id}",
    params(("id" = Uuid, Path, description = "Comment id")),
    responses(
        (status = 204, description = "No content"),
        (status = 401, body = ErrorResponse),
        (status = 403, description = "NoPermission", body = ErrorResponse),
        (status = 404, description = "CommentNotFound", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathId(id): PathId<Uuid>,
) -> HttpResult<StatusCode> {
    state
        .services
        .comments
        .delete_comment(&user, CommentId(id))
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
