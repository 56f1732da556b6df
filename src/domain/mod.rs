// src/domain/mod.rs
pub mod comment;
pub mod errors;
pub mod identity;
pub mod market;
pub mod native_product;
pub mod order;
pub mod package;
pub mod pagination;
pub mod post;
pub mod product;
