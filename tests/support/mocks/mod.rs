// tests/support/mocks/mod.rs
pub mod ordering;
pub mod store;
pub mod time;

pub use store::InMemoryStore;
pub use time::FixedClock;
