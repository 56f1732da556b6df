// src/domain/comment/entity.rs
use crate::domain::{
    errors::{DomainError, DomainResult},
    identity::UserId,
    pagination::CursorKey,
    post::PostId,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub Uuid);

impl From<CommentId> for Uuid {
    fn from(value: CommentId) -> Self {
        value.0
    }
}

impl FromStr for CommentId {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| DomainError::Validation(format!("invalid comment id: {value}")))
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: CommentId,
    pub content: String,
    pub post_id: PostId,
    pub parent_id: Option<CommentId>,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }
}

impl CursorKey for Comment {
    type Key = CommentId;

    fn cursor_key(&self) -> CommentId {
        self.id
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub content: String,
    pub post_id: PostId,
    pub parent_id: Option<CommentId>,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl NewComment {
    /// Replies may only target a top-level comment on the same post.
    pub fn ensure_valid_parent(&self, parent: &Comment) -> DomainResult<()> {
        if parent.post_id != self.post_id {
            return Err(DomainError::ParentCommentNotMatchWithPost);
        }
        if !parent.is_top_level() {
            return Err(DomainError::CommentOnSubcomment);
        }
        Ok(())
    }
}
