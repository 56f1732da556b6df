// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::ports::{security::TokenManager, time::Clock},
    domain::{
        comment::CommentRepository, native_product::NativeProductRepository,
        order::OrderRepository, package::PackageRepository, post::PostRepository,
        product::ProductRepository,
    },
};

pub mod comments;
pub mod native_products;
pub mod orders;
pub mod packages;
pub mod posts;
pub mod products;

pub use comments::CommentService;
pub use native_products::NativeProductService;
pub use orders::OrderService;
pub use packages::PackageService;
pub use posts::PostService;
pub use products::ProductService;

pub struct ApplicationServices {
    pub posts: Arc<PostService>,
    pub comments: Arc<CommentService>,
    pub products: Arc<ProductService>,
    pub packages: Arc<PackageService>,
    pub orders: Arc<OrderService>,
    pub native_products: Arc<NativeProductService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        post_repo: Arc<dyn PostRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        product_repo: Arc<dyn ProductRepository>,
        package_repo: Arc<dyn PackageRepository>,
        order_repo: Arc<dyn OrderRepository>,
        native_product_repo: Arc<dyn NativeProductRepository>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let posts = Arc::new(PostService::new(
            Arc::clone(&post_repo),
            Arc::clone(&comment_repo),
            Arc::clone(&clock),
        ));
        let comments = Arc::new(CommentService::new(
            Arc::clone(&comment_repo),
            Arc::clone(&post_repo),
            Arc::clone(&clock),
        ));
        let products = Arc::new(ProductService::new(product_repo, Arc::clone(&clock)));
        let packages = Arc::new(PackageService::new(package_repo, clock));
        let orders = Arc::new(OrderService::new(order_repo));
        let native_products = Arc::new(NativeProductService::new(native_product_repo));

        Self {
            posts,
            comments,
            products,
            packages,
            orders,
            native_products,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }

    /// Resolve a raw bearer token into the calling user.
    pub async fn authenticate(
        &self,
        token: &str,
    ) -> crate::application::ApplicationResult<crate::application::dto::AuthenticatedUser> {
        self.token_manager.authenticate(token).await
    }
}
