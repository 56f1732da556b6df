pub mod entity;
pub mod listing;
pub mod repository;

pub use entity::{NewProduct, Product, ProductId, ProductPatch};
pub use listing::{ProductFilters, ProductListing};
pub use repository::ProductRepository;
