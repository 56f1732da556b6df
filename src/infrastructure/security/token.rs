// src/infrastructure/security/token.rs
use super::claims::AccessClaims;
use crate::application::{
    dto::{AccessTokenDto, AuthenticatedUser},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use crate::domain::identity::UserId;
use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use std::time::Duration;

/// HS256 access tokens signed with a shared secret.
#[derive(Clone)]
pub struct JwtTokenManager {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl JwtTokenManager {
    pub fn new(secret: &str, ttl: Duration) -> ApplicationResult<Self> {
        if secret.is_empty() {
            return Err(ApplicationError::internal("access token secret is empty"));
        }
        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        })
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp"]);
        validation.leeway = 0;
        validation
    }
}

fn ttl_to_expires_in_seconds(ttl: Duration) -> i64 {
    i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX)
}

#[async_trait]
impl TokenManager for JwtTokenManager {
    async fn issue(&self, user_id: UserId) -> ApplicationResult<AccessTokenDto> {
        let issued_at = Utc::now();
        let ttl = ChronoDuration::from_std(self.ttl)
            .map_err(|_| ApplicationError::internal("token ttl out of range"))?;
        let expires_at = issued_at
            .checked_add_signed(ttl)
            .ok_or_else(|| ApplicationError::internal("token expiration overflow"))?;

        let claims = AccessClaims::new(user_id, issued_at, expires_at);
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|err| ApplicationError::internal(err.to_string()))?;

        Ok(AccessTokenDto {
            token,
            issued_at,
            expires_at,
            expires_in: ttl_to_expires_in_seconds(self.ttl),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let data = decode::<AccessClaims>(token, &self.decoding, &Self::validation())
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;
        AuthenticatedUser::try_from(data.claims)
    }
}
