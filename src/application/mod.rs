pub mod dto;
pub mod error;
pub mod listing;
pub mod ports;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
