// src/presentation/http/openapi/mod.rs
//! Generated API document plus the routes that serve it.
use crate::application::dto::{
    CommentDto, CustomerDto, LinkedItemDto, NativePackageDto, NativeProductDto, OrderDto,
    PackageDto, PostDto, ProductDto,
};
use crate::domain::{
    market::{Region, Source},
    post::PostOrder,
};
use crate::presentation::http::controllers::{
    comments, native_products, orders, packages, posts, products,
};
use crate::presentation::http::error::ErrorResponse;
use axum::{Router, response::Redirect, routing::get};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufWriter, path::Path, sync::OnceLock};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::{Config, SwaggerUi};

mod handlers;
pub mod openapi_meta;

pub use handlers::{head_openapi, serve_openapi};
pub use openapi_meta::{inm_matches, weak_match};

pub const OPENAPI_PATH: &str = "/openapi.json";
pub(crate) const OPENAPI_CONTENT_TYPE_JSON: &str = "application/json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        posts::get_post,
        posts::create_post,
        posts::list_posts,
        posts::delete_post,
        posts::like_post,
        posts::unlike_post,
        comments::create_comment,
        comments::list_comments,
        comments::delete_comment,
        products::get_product,
        products::create_product,
        products::list_products,
        products::update_product,
        products::delete_product,
        products::link_product,
        products::unlink_product,
        packages::create_package,
        packages::list_packages,
        packages::delete_package,
        packages::pair_package,
        orders::get_order,
        orders::list_orders,
        native_products::list_native_products,
        super::routes::healthz
    ),
    components(
        schemas(
            StatusResponse,
            ErrorResponse,
            Region,
            Source,
            PostOrder,
            PostDto,
            CommentDto,
            ProductDto,
            PackageDto,
            OrderDto,
            CustomerDto,
            LinkedItemDto,
            NativeProductDto,
            NativePackageDto,
            posts::CreatePostRequest,
            comments::CreateCommentRequest,
            products::CreateProductRequest,
            products::UpdateProductRequest,
            products::LinkNativeProductRequest,
            packages::CreatePackageRequest,
            packages::PairNativePackageRequest
        )
    ),
    tags(
        (name = "Posts", description = "Posts and likes"),
        (name = "Comments", description = "Comments and replies on posts"),
        (name = "Products", description = "Catalogue products and their links to native products"),
        (name = "Packages", description = "Catalogue packages and their pairing with native packages"),
        (name = "Orders", description = "Orders imported from booking platforms"),
        (name = "Native Products", description = "Products imported from booking platforms"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Kiosk API",
        description = "Content and commerce backend. Every list endpoint pages with an opaque `nextKey`.",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("JWT".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

static OPENAPI_BYTES: OnceLock<Bytes> = OnceLock::new();
static OPENAPI_ETAG: OnceLock<String> = OnceLock::new();

/// Serialized document, built once per process.
pub fn openapi_bytes() -> &'static Bytes {
    OPENAPI_BYTES.get_or_init(|| match serde_json::to_vec(&ApiDoc::openapi()) {
        Ok(json) => Bytes::from(json),
        Err(err) => {
            tracing::error!(error = %err, "failed to serialize OpenAPI document");
            Bytes::new()
        }
    })
}

pub fn openapi_etag() -> &'static str {
    OPENAPI_ETAG
        .get_or_init(|| openapi_meta::compute_simple_etag(openapi_bytes()))
        .as_str()
}

pub fn openapi_content_length() -> usize {
    openapi_bytes().len()
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").config(Config::from(OPENAPI_PATH));
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .route(OPENAPI_PATH, get(serve_openapi).head(head_openapi))
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot(path: &Path) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
