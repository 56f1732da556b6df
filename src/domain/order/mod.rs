pub mod entity;
pub mod repository;

pub use entity::{Customer, LinkedItem, Order, OrderFilters, OrderId, OrderListing};
pub use repository::OrderRepository;
