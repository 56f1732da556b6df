use axum::{
    body::Body,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

fn common_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::ETAG, HeaderValue::from_static(super::openapi_etag()));
    if let Some(lm) = super::openapi_meta::last_modified_str() {
        headers.insert(header::LAST_MODIFIED, HeaderValue::from_static(lm));
    }
    headers
}

fn not_modified_response() -> Response {
    (StatusCode::NOT_MODIFIED, common_headers()).into_response()
}

fn ok_response(body: Body) -> Response {
    let mut headers = common_headers();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(super::OPENAPI_CONTENT_TYPE_JSON),
    );
    headers.insert(
        header::CONTENT_LENGTH,
        HeaderValue::from(super::openapi_content_length()),
    );
    (StatusCode::OK, headers, body).into_response()
}

/// GET /openapi.json. `If-None-Match` takes precedence over
/// `If-Modified-Since`.
pub async fn serve_openapi(headers: HeaderMap) -> Response {
    if should_return_not_modified(&headers) {
        return not_modified_response();
    }

    ok_response(Body::from(super::openapi_bytes().clone()))
}

/// HEAD /openapi.json. Same headers as GET, empty body.
pub async fn head_openapi(headers: HeaderMap) -> Response {
    if should_return_not_modified(&headers) {
        return not_modified_response();
    }

    ok_response(Body::empty())
}

fn should_return_not_modified(headers: &HeaderMap) -> bool {
    if headers.contains_key(header::IF_NONE_MATCH) {
        super::openapi_meta::inm_matches(headers, super::openapi_etag())
    } else {
        super::openapi_meta::ims_matches(headers)
    }
}
