pub mod auth;
pub mod catalogue;
pub mod orders;
pub mod posts;
pub mod serde_time;

pub use auth::{AccessTokenDto, AuthenticatedUser};
pub use catalogue::{NativePackageDto, NativeProductDto, PackageDto, ProductDto};
pub use orders::{CustomerDto, LinkedItemDto, OrderDto};
pub use posts::{CommentDto, PostDto};
