// src/domain/comment/repository.rs
use super::{
    entity::{Comment, CommentId, NewComment},
    listing::CommentListing,
};
use crate::domain::{errors::DomainResult, identity::UserId, pagination::QueryOf};
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    async fn list(&self, query: QueryOf<CommentListing>) -> DomainResult<Vec<Comment>>;
    /// Author only. Deleting a top-level comment also removes its replies.
    async fn delete(&self, id: CommentId, user_id: UserId) -> DomainResult<()>;
}
