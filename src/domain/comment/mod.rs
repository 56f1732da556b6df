pub mod entity;
pub mod listing;
pub mod repository;

pub use entity::{Comment, CommentId, NewComment};
pub use listing::{CommentFilters, CommentListing};
pub use repository::CommentRepository;
