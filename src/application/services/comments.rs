// src/application/services/comments.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationError, ApplicationResult,
        dto::{AuthenticatedUser, CommentDto},
        listing,
        ports::time::Clock,
    },
    domain::{
        comment::{CommentFilters, CommentId, CommentListing, CommentRepository, NewComment},
        pagination::{IntoRawList, KeysetCursor, ListRequest, Page, RawList},
        post::{PostId, PostRepository},
    },
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct ListCommentsParams {
    /// Page size, 1 to 40. Defaults to 15.
    pub limit: Option<u64>,
    pub post_id: Uuid,
    /// List replies to this comment instead of top-level comments.
    pub parent_id: Option<Uuid>,
}

impl IntoRawList<CommentFilters, KeysetCursor<CommentId>> for ListCommentsParams {
    fn into_raw(self) -> RawList<CommentFilters, KeysetCursor<CommentId>> {
        RawList::new(
            CommentFilters {
                post_id: PostId(self.post_id),
                parent_id: self.parent_id.map(CommentId),
            },
            self.limit,
        )
    }
}

pub struct CreateCommentCommand {
    pub content: String,
    pub post_id: PostId,
    pub parent_id: Option<CommentId>,
}

pub struct CommentService {
    comments: Arc<dyn CommentRepository>,
    posts: Arc<dyn PostRepository>,
    clock: Arc<dyn Clock>,
}

impl CommentService {
    pub fn new(
        comments: Arc<dyn CommentRepository>,
        posts: Arc<dyn PostRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            comments,
            posts,
            clock,
        }
    }

    pub async fn create_comment(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        if command.content.trim().is_empty() {
            return Err(ApplicationError::invalid_argument("content cannot be empty"));
        }
        self.ensure_post_exists(command.post_id).await?;

        let new_comment = NewComment {
            content: command.content,
            post_id: command.post_id,
            parent_id: command.parent_id,
            author_id: actor.id,
            created_at: self.clock.now(),
        };

        if let Some(parent_id) = new_comment.parent_id {
            let parent = self
                .comments
                .find_by_id(parent_id)
                .await?
                .ok_or(ApplicationError::CommentNotFound)?;
            new_comment.ensure_valid_parent(&parent)?;
        }

        let comment = self.comments.insert(new_comment).await?;
        tracing::info!(comment_id = %comment.id, post_id = %comment.post_id, "comment created");
        Ok(comment.into())
    }

    pub async fn list_comments(
        &self,
        request: ListRequest<ListCommentsParams>,
    ) -> ApplicationResult<Page<CommentDto>> {
        let (options, query) = listing::plan::<CommentListing, _>(request)?;
        self.ensure_post_exists(options.filters.post_id).await?;
        let comments = self.comments.list(query).await?;
        listing::finish::<CommentListing, _>(&options, comments, CommentDto::from)
    }

    pub async fn delete_comment(
        &self,
        actor: &AuthenticatedUser,
        id: CommentId,
    ) -> ApplicationResult<()> {
        self.comments.delete(id, actor.id).await?;
        tracing::info!(comment_id = %id, author_id = %actor.id, "comment deleted");
        Ok(())
    }

    async fn ensure_post_exists(&self, id: PostId) -> ApplicationResult<()> {
        match self.posts.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(ApplicationError::PostNotFound),
        }
    }
}
