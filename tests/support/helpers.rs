// tests/support/helpers.rs
use super::mocks::{FixedClock, InMemoryStore};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::AUTHORIZATION};
use axum::response::Response;
use kiosk_core::application::{
    dto::AuthenticatedUser,
    ports::security::TokenManager,
    services::ApplicationServices,
};
use kiosk_core::domain::identity::UserId;
use kiosk_core::infrastructure::security::token::JwtTokenManager;
use kiosk_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

pub const TEST_SECRET: &str = "test-secret";

pub fn token_manager() -> Arc<JwtTokenManager> {
    Arc::new(JwtTokenManager::new(TEST_SECRET, Duration::from_secs(3600)).expect("token manager"))
}

pub fn build_services(store: &InMemoryStore) -> Arc<ApplicationServices> {
    let repo = Arc::new(store.clone());
    Arc::new(ApplicationServices::new(
        repo.clone(),
        repo.clone(),
        repo.clone(),
        repo.clone(),
        repo.clone(),
        repo,
        token_manager(),
        Arc::new(FixedClock::new()),
    ))
}

pub fn make_test_router(store: &InMemoryStore) -> axum::Router {
    let state = HttpState {
        services: build_services(store),
    };
    build_router(state, &[])
}

/// A signed-in user as the services see it.
pub async fn sign_in() -> (AuthenticatedUser, String) {
    let tokens = token_manager();
    let issued = tokens.issue(UserId::generate()).await.expect("issue token");
    let user = tokens
        .authenticate(&issued.token)
        .await
        .expect("authenticate fresh token");
    (user, issued.token)
}

pub fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn json_body(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert an error response by status and its stable code and name.
pub async fn assert_error(resp: Response, status: StatusCode, code: &str, error: &str) {
    assert_eq!(resp.status(), status);
    let json = json_body(resp).await;
    assert_eq!(json["code"], code, "unexpected body: {json}");
    assert_eq!(json["error"], error, "unexpected body: {json}");
}
