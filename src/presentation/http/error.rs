use crate::application::{
    ApplicationResult,
    error::{ApplicationError, ErrorKind},
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    body: ErrorResponse,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        let status = status_for(err.kind());
        match err.kind() {
            ErrorKind::Internal => tracing::error!(error = %err, "request failed"),
            ErrorKind::BadRequest | ErrorKind::Unauthorized => {
                tracing::debug!(code = err.code(), error = %err, "request rejected")
            }
            _ => {}
        }

        Self {
            status,
            body: ErrorResponse {
                code: err.code().to_string(),
                error: err.name().to_string(),
                message: public_message(&err),
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<ApplicationError> for HttpError {
    fn from(err: ApplicationError) -> Self {
        Self::from_error(err)
    }
}

const fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
        ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// Internal details stay in the logs.
fn public_message(err: &ApplicationError) -> String {
    match err {
        ApplicationError::Internal(_) => "internal server error".to_string(),
        other => other.to_string(),
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Error body shared by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Stable four-digit error code, e.g. `0007`.
    #[schema(example = "0007")]
    pub code: String,
    /// Error name, e.g. `InvalidNextKey`.
    #[schema(example = "InvalidNextKey")]
    pub error: String,
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
