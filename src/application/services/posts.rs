// src/application/services/posts.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationError, ApplicationResult,
        dto::{AuthenticatedUser, CommentDto, PostDto},
        listing,
        ports::time::Clock,
    },
    domain::{
        comment::{CommentFilters, CommentListing, CommentRepository},
        identity::UserId,
        pagination::{
            IntoRawList, KeysetCursor, ListOptions, ListRequest, Listing, Page, RawList,
            to_store_query,
        },
        post::{NewPost, PostFilters, PostId, PostListing, PostOrder, PostRepository},
    },
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct GetPostParams {
    /// Embed the first page of top-level comments.
    #[serde(default)]
    pub with_comments: bool,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct ListPostsParams {
    /// Page size, 1 to 40. Defaults to 15.
    pub limit: Option<u64>,
    #[serde(default)]
    #[param(inline)]
    pub order_by: PostOrder,
    pub author_id: Option<Uuid>,
}

impl IntoRawList<PostFilters, KeysetCursor<PostId>> for ListPostsParams {
    fn into_raw(self) -> RawList<PostFilters, KeysetCursor<PostId>> {
        RawList::new(
            PostFilters {
                order_by: self.order_by,
                author_id: self.author_id.map(UserId),
            },
            self.limit,
        )
    }
}

pub struct CreatePostCommand {
    pub title: String,
    pub content: String,
}

pub struct PostService {
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
    clock: Arc<dyn Clock>,
}

impl PostService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        comments: Arc<dyn CommentRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            posts,
            comments,
            clock,
        }
    }

    pub async fn get_post(&self, id: PostId, params: GetPostParams) -> ApplicationResult<PostDto> {
        let post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or(ApplicationError::PostNotFound)?;

        let dto = PostDto::from(post);
        if !params.with_comments {
            return Ok(dto);
        }

        let options: ListOptions<_, KeysetCursor<_>> = ListOptions::first_page(
            CommentFilters {
                post_id: id,
                parent_id: None,
            },
            CommentListing::DEFAULT_LIMIT,
        );
        let query = to_store_query(&options, CommentListing::sort(&options.filters));
        let comments = self.comments.list(query).await?;
        Ok(dto.with_comments(comments.into_iter().map(CommentDto::from).collect()))
    }

    pub async fn create_post(
        &self,
        actor: &AuthenticatedUser,
        command: CreatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let new_post = NewPost::new(command.title, command.content, actor.id, self.clock.now())?;
        let post = self.posts.insert(new_post).await?;
        tracing::info!(post_id = %post.id, author_id = %actor.id, "post created");
        Ok(post.into())
    }

    pub async fn list_posts(
        &self,
        request: ListRequest<ListPostsParams>,
    ) -> ApplicationResult<Page<PostDto>> {
        let (options, query) = listing::plan::<PostListing, _>(request)?;
        let posts = self.posts.list(query).await?;
        listing::finish::<PostListing, _>(&options, posts, PostDto::from)
    }

    pub async fn delete_post(&self, actor: &AuthenticatedUser, id: PostId) -> ApplicationResult<()> {
        self.posts.delete(id, actor.id).await?;
        tracing::info!(post_id = %id, author_id = %actor.id, "post deleted");
        Ok(())
    }

    pub async fn like_post(&self, actor: &AuthenticatedUser, id: PostId) -> ApplicationResult<()> {
        self.posts.like(id, actor.id).await?;
        Ok(())
    }

    pub async fn unlike_post(&self, actor: &AuthenticatedUser, id: PostId) -> ApplicationResult<()> {
        self.posts.unlike(id, actor.id).await?;
        Ok(())
    }
}
