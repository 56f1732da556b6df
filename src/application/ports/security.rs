// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AccessTokenDto, AuthenticatedUser},
};
use crate::domain::identity::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait TokenManager: Send + Sync {
    async fn issue(&self, user_id: UserId) -> ApplicationResult<AccessTokenDto>;
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}
