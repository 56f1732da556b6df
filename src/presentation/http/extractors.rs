// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    domain::pagination::ListRequest,
    presentation::http::state::HttpState,
};
use axum::{
    Extension,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};
use serde::de::DeserializeOwned;
use std::str::FromStr;

use super::error::HttpError;

const NEXT_KEY_PARAM: &str = "nextKey";

#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

impl FromRequestParts<()> for Authenticated {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &()) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| HttpError::from_error(ApplicationError::internal("application state missing")))?;

        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized(
                    "missing Authorization header",
                ))
            })?;

        let user = app_state
            .services
            .authenticate(header.token())
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(user))
    }
}

/// Query string of a list endpoint.
///
/// A `nextKey` parameter wins over everything else in the query; otherwise the
/// endpoint's parameter type is deserialized and failures become
/// `InvalidArgument`.
#[derive(Debug, Clone)]
pub struct ListQuery<P>(pub ListRequest<P>);

impl<P> FromRequestParts<()> for ListQuery<P>
where
    P: DeserializeOwned + Send,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &()) -> Result<Self, Self::Rejection> {
        parse_list_query(parts.uri.query().unwrap_or_default())
            .map(Self)
            .map_err(HttpError::from_error)
    }
}

pub(crate) fn parse_list_query<P: DeserializeOwned>(
    query: &str,
) -> Result<ListRequest<P>, ApplicationError> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)
        .map_err(|err| ApplicationError::invalid_argument(err.to_string()))?;
    if let Some((_, token)) = pairs.into_iter().find(|(key, _)| key == NEXT_KEY_PARAM) {
        return Ok(ListRequest::NextKey(token));
    }

    serde_urlencoded::from_str::<P>(query)
        .map(ListRequest::Params)
        .map_err(|err| ApplicationError::invalid_argument(err.to_string()))
}

/// Query string of a non-list endpoint, with the same error shape as
/// `ListQuery`.
#[derive(Debug, Clone)]
pub struct QueryParams<T>(pub T);

impl<T> FromRequestParts<()> for QueryParams<T>
where
    T: DeserializeOwned + Send,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &()) -> Result<Self, Self::Rejection> {
        serde_urlencoded::from_str(parts.uri.query().unwrap_or_default())
            .map(Self)
            .map_err(|err| HttpError::from_error(ApplicationError::invalid_argument(err.to_string())))
    }
}

/// Single `{id}` path segment parsed with `FromStr`; a malformed id is an
/// `InvalidArgument` rather than axum's plain-text rejection.
#[derive(Debug, Clone, Copy)]
pub struct PathId<T>(pub T);

impl<T> FromRequestParts<()> for PathId<T>
where
    T: FromStr + Send,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &()) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|err| HttpError::from_error(ApplicationError::invalid_argument(err.body_text())))?;

        raw.parse::<T>()
            .map(Self)
            .map_err(|_| HttpError::from_error(ApplicationError::invalid_argument(format!("invalid id: {raw}"))))
    }
}
