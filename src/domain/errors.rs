// src/domain/errors.rs
use std::fmt;
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Post,
    Comment,
    Product,
    Package,
    Order,
    NativeProduct,
    NativePackage,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Post => "post",
            Self::Comment => "comment",
            Self::Product => "product",
            Self::Package => "package",
            Self::Order => "order",
            Self::NativeProduct => "native product",
            Self::NativePackage => "native package",
        })
    }
}

/// Store-level failures, compared by variant and never by message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{0} not found")]
    NotFound(Entity),
    #[error("caller is not the author")]
    NoPermission,
    #[error("post already liked")]
    PostAlreadyLiked,
    #[error("post not liked")]
    PostNotLiked,
    #[error("replies cannot have replies")]
    CommentOnSubcomment,
    #[error("parent comment belongs to another post")]
    ParentCommentNotMatchWithPost,
    #[error("validation error: {0}")]
    Validation(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }
}
