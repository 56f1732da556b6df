// src/infrastructure/repositories/mod.rs
mod error;
mod paging;
mod postgres_catalogue;
mod postgres_comment;
mod postgres_native_product;
mod postgres_order;
mod postgres_post;

pub use error::map_sqlx;
pub use postgres_catalogue::{PostgresPackageRepository, PostgresProductRepository};
pub use postgres_comment::PostgresCommentRepository;
pub use postgres_native_product::PostgresNativeProductRepository;
pub use postgres_order::PostgresOrderRepository;
pub use postgres_post::PostgresPostRepository;
