// src/presentation/http/controllers/mod.rs
pub mod comments;
pub mod native_products;
pub mod orders;
pub mod packages;
pub mod posts;
pub mod products;
