pub mod entity;
pub mod listing;
pub mod repository;

pub use entity::{NewPost, Post, PostId};
pub use listing::{PostFilters, PostListing, PostOrder};
pub use repository::PostRepository;
