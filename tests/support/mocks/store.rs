// tests/support/mocks/store.rs
use super::ordering::{SortValue, page_of};
use async_trait::async_trait;
use chrono::Utc;
use kiosk_core::domain::{
    comment::{Comment, CommentId, CommentListing, CommentRepository, NewComment},
    errors::{DomainError, DomainResult, Entity},
    identity::UserId,
    market::Source,
    native_product::{NativeProduct, NativeProductListing, NativeProductRepository},
    order::{Order, OrderId, OrderListing, OrderRepository},
    package::{NewPackage, Package, PackageId, PackageListing, PackageRepository},
    pagination::QueryOf,
    post::{NewPost, Post, PostId, PostListing, PostRepository},
    product::{NewProduct, Product, ProductId, ProductListing, ProductPatch, ProductRepository},
};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

#[derive(Default)]
struct Data {
    posts: Vec<(Post, bool)>,
    likes: HashSet<(PostId, UserId)>,
    comments: Vec<(Comment, bool)>,
    products: Vec<Product>,
    packages: Vec<Package>,
    native_products: Vec<NativeProduct>,
    orders: Vec<Order>,
    next_id: i64,
}

impl Data {
    fn allocate(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn live_post(&mut self, id: PostId) -> DomainResult<&mut Post> {
        self.posts
            .iter_mut()
            .find(|(post, deleted)| post.id == id && !*deleted)
            .map(|(post, _)| post)
            .ok_or(DomainError::NotFound(Entity::Post))
    }

    fn packages_of(&self, id: ProductId) -> Vec<Package> {
        let mut packages: Vec<_> = self
            .packages
            .iter()
            .filter(|package| package.product_id == id)
            .cloned()
            .collect();
        packages.sort_by_key(|package| package.id);
        packages
    }
}

/// One in-memory backend behind every repository trait, so cascades between
/// posts and comments or products and packages behave like the database.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    data: Arc<Mutex<Data>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_post(&self, post: Post) {
        self.data.lock().unwrap().posts.push((post, false));
    }

    pub fn seed_native_product(&self, native: NativeProduct) {
        self.data.lock().unwrap().native_products.push(native);
    }

    pub fn seed_order(&self, order: Order) {
        self.data.lock().unwrap().orders.push(order);
    }

    pub fn native_product(&self, id: &str, source: Source) -> Option<NativeProduct> {
        self.data
            .lock()
            .unwrap()
            .native_products
            .iter()
            .find(|native| native.id == id && native.source == source)
            .cloned()
    }

    pub fn is_comment_deleted(&self, id: CommentId) -> bool {
        self.data
            .lock()
            .unwrap()
            .comments
            .iter()
            .any(|(comment, deleted)| comment.id == id && *deleted)
    }
}

#[async_trait]
impl PostRepository for InMemoryStore {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let mut data = self.data.lock().unwrap();
        Ok(data.live_post(id).ok().cloned())
    }

    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let post = Post {
            id: PostId(Uuid::new_v4()),
            title: post.title,
            content: post.content,
            like_count: 0,
            author_id: post.author_id,
            created_at: post.created_at,
        };
        self.data.lock().unwrap().posts.push((post.clone(), false));
        Ok(post)
    }

    async fn list(&self, query: QueryOf<PostListing>) -> DomainResult<Vec<Post>> {
        let data = self.data.lock().unwrap();
        let rows: Vec<Post> = data
            .posts
            .iter()
            .filter(|(post, deleted)| {
                !deleted
                    && query
                        .filters
                        .author_id
                        .is_none_or(|author| post.author_id == author)
            })
            .map(|(post, _)| post.clone())
            .collect();
        Ok(page_of(
            rows,
            &query.sort,
            &query.start,
            query.limit,
            |post, column| match column {
                "like_count" => Some(SortValue::Int(post.like_count)),
                "created_at" => Some(SortValue::Time(post.created_at)),
                "id" => Some(SortValue::Id(post.id.0)),
                other => panic!("posts are not sortable by {other}"),
            },
            |post| post.id,
        ))
    }

    async fn delete(&self, id: PostId, user_id: UserId) -> DomainResult<()> {
        let mut data = self.data.lock().unwrap();
        if data.live_post(id)?.author_id != user_id {
            return Err(DomainError::NoPermission);
        }
        for (post, deleted) in data.posts.iter_mut() {
            if post.id == id {
                *deleted = true;
            }
        }
        for (comment, deleted) in data.comments.iter_mut() {
            if comment.post_id == id {
                *deleted = true;
            }
        }
        Ok(())
    }

    async fn like(&self, id: PostId, user_id: UserId) -> DomainResult<()> {
        let mut data = self.data.lock().unwrap();
        data.live_post(id)?;
        if !data.likes.insert((id, user_id)) {
            return Err(DomainError::PostAlreadyLiked);
        }
        data.live_post(id)?.like_count += 1;
        Ok(())
    }

    async fn unlike(&self, id: PostId, user_id: UserId) -> DomainResult<()> {
        let mut data = self.data.lock().unwrap();
        data.live_post(id)?;
        if !data.likes.remove(&(id, user_id)) {
            return Err(DomainError::PostNotLiked);
        }
        data.live_post(id)?.like_count -= 1;
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let data = self.data.lock().unwrap();
        Ok(data
            .comments
            .iter()
            .find(|(comment, deleted)| comment.id == id && !deleted)
            .map(|(comment, _)| comment.clone()))
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut data = self.data.lock().unwrap();
        data.live_post(comment.post_id)?;
        let comment = Comment {
            id: CommentId(Uuid::new_v4()),
            content: comment.content,
            post_id: comment.post_id,
            parent_id: comment.parent_id,
            author_id: comment.author_id,
            created_at: comment.created_at,
        };
        data.comments.push((comment.clone(), false));
        Ok(comment)
    }

    async fn list(&self, query: QueryOf<CommentListing>) -> DomainResult<Vec<Comment>> {
        let data = self.data.lock().unwrap();
        let rows: Vec<Comment> = data
            .comments
            .iter()
            .filter(|(comment, deleted)| {
                !deleted
                    && comment.post_id == query.filters.post_id
                    && comment.parent_id == query.filters.parent_id
            })
            .map(|(comment, _)| comment.clone())
            .collect();
        Ok(page_of(
            rows,
            &query.sort,
            &query.start,
            query.limit,
            |comment, column| match column {
                "created_at" => Some(SortValue::Time(comment.created_at)),
                "id" => Some(SortValue::Id(comment.id.0)),
                other => panic!("comments are not sortable by {other}"),
            },
            |comment| comment.id,
        ))
    }

    async fn delete(&self, id: CommentId, user_id: UserId) -> DomainResult<()> {
        let mut data = self.data.lock().unwrap();
        let author = data
            .comments
            .iter()
            .find(|(comment, deleted)| comment.id == id && !deleted)
            .map(|(comment, _)| comment.author_id)
            .ok_or(DomainError::NotFound(Entity::Comment))?;
        if author != user_id {
            return Err(DomainError::NoPermission);
        }
        for (comment, deleted) in data.comments.iter_mut() {
            if comment.id == id || comment.parent_id == Some(id) {
                *deleted = true;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for InMemoryStore {
    async fn find_by_id(&self, id: ProductId, with_packages: bool) -> DomainResult<Option<Product>> {
        let data = self.data.lock().unwrap();
        Ok(data
            .products
            .iter()
            .find(|product| product.id == id)
            .cloned()
            .map(|mut product| {
                if with_packages {
                    product.packages = Some(data.packages_of(id));
                }
                product
            }))
    }

    async fn insert(&self, product: NewProduct) -> DomainResult<Product> {
        let mut data = self.data.lock().unwrap();
        let product = Product {
            id: ProductId(data.allocate()),
            name: product.name,
            region: product.region,
            packages: None,
            created_at: product.created_at,
            updated_at: product.created_at,
        };
        data.products.push(product.clone());
        Ok(product)
    }

    async fn list(&self, query: QueryOf<ProductListing>) -> DomainResult<Vec<Product>> {
        let data = self.data.lock().unwrap();
        let rows: Vec<Product> = data
            .products
            .iter()
            .filter(|product| product.region == query.filters.region)
            .cloned()
            .collect();
        let mut page = page_of(
            rows,
            &query.sort,
            &query.start,
            query.limit,
            |product, _| Some(SortValue::Int(product.id.0)),
            |product| product.id,
        );
        if query.filters.with_packages {
            for product in page.iter_mut() {
                product.packages = Some(data.packages_of(product.id));
            }
        }
        Ok(page)
    }

    async fn update(&self, id: ProductId, patch: ProductPatch) -> DomainResult<()> {
        let mut data = self.data.lock().unwrap();
        let product = data
            .products
            .iter_mut()
            .find(|product| product.id == id)
            .ok_or(DomainError::NotFound(Entity::Product))?;
        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(region) = patch.region {
            product.region = region;
        }
        product.updated_at = patch.updated_at;
        Ok(())
    }

    async fn delete(&self, id: ProductId) -> DomainResult<()> {
        let mut data = self.data.lock().unwrap();
        let before = data.products.len();
        data.products.retain(|product| product.id != id);
        if data.products.len() == before {
            return Err(DomainError::NotFound(Entity::Product));
        }
        data.packages.retain(|package| package.product_id != id);
        for native in data.native_products.iter_mut() {
            if native.product_id == Some(id) {
                native.product_id = None;
            }
        }
        Ok(())
    }

    async fn link(&self, id: ProductId, native_product_id: &str, source: Source) -> DomainResult<()> {
        let mut data = self.data.lock().unwrap();
        let product_exists = data.products.iter().any(|product| product.id == id);
        let native = data
            .native_products
            .iter_mut()
            .find(|native| native.id == native_product_id && native.source == source)
            .ok_or(DomainError::NotFound(Entity::NativeProduct))?;
        if !product_exists {
            return Err(DomainError::NotFound(Entity::Product));
        }
        native.product_id = Some(id);
        native.updated_at = Utc::now();
        Ok(())
    }

    async fn unlink(&self, id: ProductId, native_product_id: &str, source: Source) -> DomainResult<()> {
        let mut data = self.data.lock().unwrap();
        if !data.products.iter().any(|product| product.id == id) {
            return Err(DomainError::NotFound(Entity::Product));
        }
        let native = data
            .native_products
            .iter_mut()
            .find(|native| {
                native.id == native_product_id
                    && native.source == source
                    && native.product_id == Some(id)
            })
            .ok_or(DomainError::NotFound(Entity::NativeProduct))?;
        native.product_id = None;
        native.updated_at = Utc::now();
        Ok(())
    }
}

#[async_trait]
impl PackageRepository for InMemoryStore {
    async fn insert(&self, package: NewPackage) -> DomainResult<Package> {
        let mut data = self.data.lock().unwrap();
        if !data.products.iter().any(|product| product.id == package.product_id) {
            return Err(DomainError::NotFound(Entity::Product));
        }
        let package = Package {
            id: PackageId(data.allocate()),
            name: package.name,
            region: package.region,
            product_id: package.product_id,
            created_at: package.created_at,
            updated_at: package.created_at,
        };
        data.packages.push(package.clone());
        Ok(package)
    }

    async fn list(&self, query: QueryOf<PackageListing>) -> DomainResult<Vec<Package>> {
        let data = self.data.lock().unwrap();
        let rows: Vec<Package> = data
            .packages
            .iter()
            .filter(|package| {
                package.region == query.filters.region
                    && query
                        .filters
                        .product_id
                        .is_none_or(|product_id| package.product_id == product_id)
            })
            .cloned()
            .collect();
        Ok(page_of(
            rows,
            &query.sort,
            &query.start,
            query.limit,
            |package, _| Some(SortValue::Int(package.id.0)),
            |package| package.id,
        ))
    }

    async fn delete(&self, id: PackageId) -> DomainResult<()> {
        let mut data = self.data.lock().unwrap();
        let before = data.packages.len();
        data.packages.retain(|package| package.id != id);
        if data.packages.len() == before {
            return Err(DomainError::NotFound(Entity::Package));
        }
        for native in data.native_products.iter_mut() {
            for package in native.packages.iter_mut() {
                if package.package_id == Some(id) {
                    package.package_id = None;
                }
            }
        }
        Ok(())
    }

    async fn pair(&self, id: PackageId, native_package_id: &str, source: Source) -> DomainResult<()> {
        let mut data = self.data.lock().unwrap();
        let package_exists = data.packages.iter().any(|package| package.id == id);
        let native = data
            .native_products
            .iter_mut()
            .flat_map(|native| native.packages.iter_mut())
            .find(|package| package.id == native_package_id && package.source == source)
            .ok_or(DomainError::NotFound(Entity::NativePackage))?;
        if !package_exists {
            return Err(DomainError::NotFound(Entity::Package));
        }
        native.package_id = Some(id);
        Ok(())
    }
}

#[async_trait]
impl OrderRepository for InMemoryStore {
    async fn find_by_id(&self, id: OrderId) -> DomainResult<Option<Order>> {
        let data = self.data.lock().unwrap();
        Ok(data.orders.iter().find(|order| order.id == id).cloned())
    }

    async fn list(&self, query: QueryOf<OrderListing>) -> DomainResult<Vec<Order>> {
        let data = self.data.lock().unwrap();
        let rows: Vec<Order> = data
            .orders
            .iter()
            .filter(|order| order.region == query.filters.region)
            .cloned()
            .collect();
        Ok(page_of(
            rows,
            &query.sort,
            &query.start,
            query.limit,
            |order, _| Some(SortValue::Int(order.id.0)),
            |order| order.id,
        ))
    }
}

#[async_trait]
impl NativeProductRepository for InMemoryStore {
    async fn list(&self, query: QueryOf<NativeProductListing>) -> DomainResult<Vec<NativeProduct>> {
        let data = self.data.lock().unwrap();
        let filters = &query.filters;
        let needle = filters.name.as_ref().map(|name| name.to_lowercase());
        let rows: Vec<NativeProduct> = data
            .native_products
            .iter()
            .filter(|native| {
                native.region == filters.region
                    && needle
                        .as_ref()
                        .is_none_or(|needle| native.name.to_lowercase().contains(needle))
                    && filters
                        .product_id
                        .is_none_or(|product_id| native.product_id == Some(product_id))
                    && (!filters.no_product_id || native.product_id.is_none())
                    && filters.source.is_none_or(|source| native.source == source)
            })
            .cloned()
            .collect();
        Ok(page_of(
            rows,
            &query.sort,
            &query.start,
            query.limit,
            |native, column| match column {
                "product_id" => native.product_id.map(|id| SortValue::Int(id.0)),
                "created_at" => Some(SortValue::Time(native.created_at)),
                "source" => Some(SortValue::Text(native.source.as_str().to_string())),
                "id" => Some(SortValue::Text(native.id.clone())),
                other => panic!("native products are not sortable by {other}"),
            },
            |_| unreachable!("native products page by offset"),
        ))
    }
}
