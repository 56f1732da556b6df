// src/domain/post/repository.rs
use super::{
    entity::{NewPost, Post, PostId},
    listing::PostListing,
};
use crate::domain::{errors::DomainResult, identity::UserId, pagination::QueryOf};
use async_trait::async_trait;

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Soft-deleted posts are never returned.
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    async fn list(&self, query: QueryOf<PostListing>) -> DomainResult<Vec<Post>>;
    /// Author only. Soft-deletes the post together with all of its comments.
    async fn delete(&self, id: PostId, user_id: UserId) -> DomainResult<()>;
    async fn like(&self, id: PostId, user_id: UserId) -> DomainResult<()>;
    async fn unlike(&self, id: PostId, user_id: UserId) -> DomainResult<()>;
}
