// src/application/dto/posts.rs
use crate::domain::{comment::Comment, post::Post};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::serde_time;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub like_count: i64,
    /// First page of top-level comments, present when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<CommentDto>>,
    pub author_id: Uuid,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl PostDto {
    pub fn with_comments(mut self, comments: Vec<CommentDto>) -> Self {
        self.comments = Some(comments);
        self
    }
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            title: post.title,
            content: post.content,
            like_count: post.like_count,
            comments: None,
            author_id: post.author_id.into(),
            created_at: post.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: Uuid,
    pub content: String,
    pub post_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub author_id: Uuid,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            content: comment.content,
            post_id: comment.post_id.into(),
            parent_id: comment.parent_id.map(Into::into),
            author_id: comment.author_id.into(),
            created_at: comment.created_at,
        }
    }
}
