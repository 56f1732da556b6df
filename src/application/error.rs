// src/application/error.rs
use crate::domain::{
    errors::{DomainError, Entity},
    pagination::{CursorError, GateError},
};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Transport-neutral class of a failure; the HTTP layer turns it into a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    Internal,
}

/// Public error catalogue. Every variant has a stable code clients may rely on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    #[error("internal server error: {0}")]
    Internal(String),
    #[error("route not found")]
    RouteNotFound,
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("no permission")]
    NoPermission,
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("invalid next key: {0}")]
    InvalidNextKey(String),

    #[error("post not found")]
    PostNotFound,
    #[error("post already liked")]
    PostAlreadyLiked,
    #[error("post not liked")]
    PostNotLiked,
    #[error("comment not found")]
    CommentNotFound,
    #[error("cannot comment on a subcomment")]
    CommentOnSubcomment,
    #[error("parent comment does not belong to this post")]
    ParentCommentNotMatchWithPost,

    #[error("product not found")]
    ProductNotFound,
    #[error("package not found")]
    PackageNotFound,
    #[error("order not found")]
    OrderNotFound,
    #[error("native product not found")]
    NativeProductNotFound,
    #[error("native package not found")]
    NativePackageNotFound,
}

impl ApplicationError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn not_found(entity: Entity) -> Self {
        match entity {
            Entity::Post => Self::PostNotFound,
            Entity::Comment => Self::CommentNotFound,
            Entity::Product => Self::ProductNotFound,
            Entity::Package => Self::PackageNotFound,
            Entity::Order => Self::OrderNotFound,
            Entity::NativeProduct => Self::NativeProductNotFound,
            Entity::NativePackage => Self::NativePackageNotFound,
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::Internal(_) => "0000",
            Self::RouteNotFound => "0001",
            Self::InvalidArgument(_) => "0002",
            Self::NoPermission => "0003",
            Self::Unauthorized(_) => "0005",
            Self::InvalidNextKey(_) => "0007",
            Self::PostNotFound => "5000",
            Self::PostAlreadyLiked => "5001",
            Self::PostNotLiked => "5002",
            Self::CommentNotFound => "5004",
            Self::CommentOnSubcomment => "5005",
            Self::ParentCommentNotMatchWithPost => "5006",
            Self::ProductNotFound => "6000",
            Self::PackageNotFound => "6001",
            Self::OrderNotFound => "6002",
            Self::NativeProductNotFound => "6003",
            Self::NativePackageNotFound => "6004",
        }
    }

    /// Variant name as exposed in error bodies.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Internal(_) => "InternalServerError",
            Self::RouteNotFound => "RouteNotFound",
            Self::InvalidArgument(_) => "InvalidArgument",
            Self::NoPermission => "NoPermission",
            Self::Unauthorized(_) => "Unauthorized",
            Self::InvalidNextKey(_) => "InvalidNextKey",
            Self::PostNotFound => "PostNotFound",
            Self::PostAlreadyLiked => "PostAlreadyLiked",
            Self::PostNotLiked => "PostNotLiked",
            Self::CommentNotFound => "CommentNotFound",
            Self::CommentOnSubcomment => "CommentOnSubcomment",
            Self::ParentCommentNotMatchWithPost => "ParentCommentNotMatchWithPost",
            Self::ProductNotFound => "ProductNotFound",
            Self::PackageNotFound => "PackageNotFound",
            Self::OrderNotFound => "OrderNotFound",
            Self::NativeProductNotFound => "NativeProductNotFound",
            Self::NativePackageNotFound => "NativePackageNotFound",
        }
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Internal(_) => ErrorKind::Internal,
            Self::InvalidArgument(_) | Self::InvalidNextKey(_) => ErrorKind::BadRequest,
            Self::Unauthorized(_) => ErrorKind::Unauthorized,
            Self::NoPermission => ErrorKind::Forbidden,
            Self::RouteNotFound
            | Self::PostNotFound
            | Self::CommentNotFound
            | Self::ProductNotFound
            | Self::PackageNotFound
            | Self::OrderNotFound
            | Self::NativeProductNotFound
            | Self::NativePackageNotFound => ErrorKind::NotFound,
            Self::PostAlreadyLiked
            | Self::PostNotLiked
            | Self::CommentOnSubcomment
            | Self::ParentCommentNotMatchWithPost => ErrorKind::Conflict,
        }
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(entity) => Self::not_found(entity),
            DomainError::NoPermission => Self::NoPermission,
            DomainError::PostAlreadyLiked => Self::PostAlreadyLiked,
            DomainError::PostNotLiked => Self::PostNotLiked,
            DomainError::CommentOnSubcomment => Self::CommentOnSubcomment,
            DomainError::ParentCommentNotMatchWithPost => Self::ParentCommentNotMatchWithPost,
            DomainError::Validation(msg) => Self::InvalidArgument(msg),
            DomainError::Persistence(msg) => Self::Internal(msg),
        }
    }
}

impl From<GateError> for ApplicationError {
    fn from(err: GateError) -> Self {
        match err {
            GateError::InvalidNextKey(inner) => Self::InvalidNextKey(inner.to_string()),
            GateError::InvalidArgument(msg) => Self::InvalidArgument(msg),
        }
    }
}

/// Only encoding can fail once a page has been fetched, and that is our fault.
impl From<CursorError> for ApplicationError {
    fn from(err: CursorError) -> Self {
        Self::Internal(err.to_string())
    }
}
