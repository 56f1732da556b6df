pub mod entity;
pub mod listing;
pub mod repository;

pub use entity::{NativePackage, NativeProduct};
pub use listing::{NativeProductFilters, NativeProductListing};
pub use repository::NativeProductRepository;
