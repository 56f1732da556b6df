// tests/pagination_flow.rs
// Service-level listing flows against the in-memory store.
use kiosk_core::application::ApplicationError;
use kiosk_core::application::services::{
    comments::{CreateCommentCommand, ListCommentsParams},
    native_products::ListNativeProductsParams,
    orders::ListOrdersParams,
    packages::{CreatePackageCommand, ListPackagesParams},
    posts::{CreatePostCommand, GetPostParams, ListPostsParams},
    products::{CreateProductCommand, LinkNativeProductCommand, ListProductsParams},
};
use kiosk_core::domain::{
    comment::CommentId,
    market::{Region, Source},
    pagination::{ListRequest, decode_next_key, encode_next_key},
    post::{PostId, PostOrder},
};
use serde_json::json;

mod support;
use support::{InMemoryStore, NativeProductBuilder, PostBuilder, build_services, order, sign_in};

fn posts_params(limit: u64, order_by: PostOrder) -> ListRequest<ListPostsParams> {
    ListRequest::Params(ListPostsParams {
        limit: Some(limit),
        order_by,
        author_id: None,
    })
}

fn native_params(region: Region) -> ListNativeProductsParams {
    ListNativeProductsParams {
        limit: None,
        region,
        name: None,
        product_id: None,
        no_product_id: false,
        source: None,
        offset: None,
    }
}

#[tokio::test]
async fn posts_walk_by_likes_without_gaps_or_repeats() {
    let store = InMemoryStore::new();
    for likes in [5, 9, 1, 9, 3] {
        store.seed_post(PostBuilder::new().likes(likes).build());
    }
    let services = build_services(&store);

    let first = services
        .posts
        .list_posts(posts_params(2, PostOrder::LikeDesc))
        .await
        .unwrap();
    assert_eq!(first.items.len(), 2);
    assert!(first.items.iter().all(|post| post.like_count == 9));
    let token = first.next_key.expect("full page carries a next key");

    let second = services
        .posts
        .list_posts(ListRequest::NextKey(token))
        .await
        .unwrap();
    let likes: Vec<i64> = second.items.iter().map(|post| post.like_count).collect();
    assert_eq!(likes, [5, 3]);
    let token = second.next_key.expect("second page is also full");

    let last = services
        .posts
        .list_posts(ListRequest::NextKey(token))
        .await
        .unwrap();
    assert_eq!(last.items.len(), 1);
    assert_eq!(last.items[0].like_count, 1);
    assert_eq!(last.next_key, None);
}

#[tokio::test]
async fn next_key_carries_the_original_options() {
    let store = InMemoryStore::new();
    for minutes in 0..3 {
        store.seed_post(PostBuilder::new().minutes_after_base(minutes).build());
    }
    let services = build_services(&store);

    let page = services
        .posts
        .list_posts(posts_params(2, PostOrder::CreatedAtDesc))
        .await
        .unwrap();
    let record = decode_next_key(page.next_key.as_deref().unwrap()).unwrap();
    assert_eq!(record["orderBy"], "CREATED_AT_DESC");
    assert_eq!(record["limit"], 2);
    assert_eq!(record["cursor"], json!(page.items[1].id));
}

#[tokio::test]
async fn exact_multiple_ends_with_an_empty_page() {
    let store = InMemoryStore::new();
    for likes in 0..2 {
        store.seed_post(PostBuilder::new().likes(likes).build());
    }
    let services = build_services(&store);

    let first = services
        .posts
        .list_posts(posts_params(2, PostOrder::LikeDesc))
        .await
        .unwrap();
    let empty = services
        .posts
        .list_posts(ListRequest::NextKey(first.next_key.unwrap()))
        .await
        .unwrap();
    assert!(empty.items.is_empty());
    assert_eq!(empty.next_key, None);
}

#[tokio::test]
async fn malformed_tokens_are_invalid_next_keys() {
    let services = build_services(&InMemoryStore::new());

    for token in ["!!!", "bm90IGpzb24", "WzEsMl0"] {
        let err = services
            .posts
            .list_posts(ListRequest::NextKey(token.into()))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "0007", "{token}");
    }
}

#[tokio::test]
async fn out_of_range_limit_depends_on_where_it_came_from() {
    let services = build_services(&InMemoryStore::new());

    let err = services
        .posts
        .list_posts(posts_params(999, PostOrder::LikeDesc))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "0002");

    let forged = encode_next_key(&json!({ "orderBy": "LIKE_DESC", "limit": 999 })).unwrap();
    let err = services
        .posts
        .list_posts(ListRequest::NextKey(forged))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::InvalidNextKey(_)));
}

#[tokio::test]
async fn token_from_another_listing_is_rejected() {
    let store = InMemoryStore::new();
    let services = build_services(&store);
    for _ in 0..2 {
        services
            .products
            .create_product(CreateProductCommand {
                name: "Tokyo tower".into(),
                region: Region::Jp,
            })
            .await
            .unwrap();
    }

    let products = services
        .products
        .list_products(ListRequest::Params(ListProductsParams {
            limit: Some(1),
            region: Region::Jp,
            with_packages: false,
        }))
        .await
        .unwrap();
    let err = services
        .posts
        .list_posts(ListRequest::NextKey(products.next_key.unwrap()))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "0007");
}

#[tokio::test]
async fn products_and_packages_page_by_id() {
    let store = InMemoryStore::new();
    let services = build_services(&store);
    let mut ids = Vec::new();
    for name in ["a", "b", "c"] {
        let product = services
            .products
            .create_product(CreateProductCommand {
                name: name.into(),
                region: Region::Tw,
            })
            .await
            .unwrap();
        ids.push(product.id);
    }
    services
        .products
        .create_product(CreateProductCommand {
            name: "elsewhere".into(),
            region: Region::Kr,
        })
        .await
        .unwrap();
    services
        .packages
        .create_package(CreatePackageCommand {
            name: "adult".into(),
            region: Region::Tw,
            product_id: kiosk_core::domain::product::ProductId(ids[0]),
        })
        .await
        .unwrap();

    let first = services
        .products
        .list_products(ListRequest::Params(ListProductsParams {
            limit: Some(2),
            region: Region::Tw,
            with_packages: true,
        }))
        .await
        .unwrap();
    assert_eq!(first.items.iter().map(|p| p.id).collect::<Vec<_>>(), ids[..2]);
    assert_eq!(first.items[0].packages.as_ref().map(Vec::len), Some(1));

    let second = services
        .products
        .list_products(ListRequest::NextKey(first.next_key.unwrap()))
        .await
        .unwrap();
    assert_eq!(second.items.len(), 1);
    assert_eq!(second.items[0].id, ids[2]);
    assert!(second.items[0].packages.is_some(), "withPackages survives the token");
    assert_eq!(second.next_key, None);

    let packages = services
        .packages
        .list_packages(ListRequest::Params(ListPackagesParams {
            limit: None,
            region: Region::Tw,
            product_id: Some(ids[1]),
        }))
        .await
        .unwrap();
    assert!(packages.items.is_empty());
}

#[tokio::test]
async fn orders_filter_by_region() {
    let store = InMemoryStore::new();
    store.seed_order(order(1, Region::Th));
    store.seed_order(order(2, Region::Jp));
    store.seed_order(order(3, Region::Th));
    let services = build_services(&store);

    let page = services
        .orders
        .list_orders(ListRequest::Params(ListOrdersParams {
            limit: Some(1),
            region: Region::Th,
        }))
        .await
        .unwrap();
    assert_eq!(page.items[0].id, 1);
    let next = services
        .orders
        .list_orders(ListRequest::NextKey(page.next_key.unwrap()))
        .await
        .unwrap();
    assert_eq!(next.items[0].id, 3);

    let err = services
        .orders
        .get_order(kiosk_core::domain::order::OrderId(99))
        .await
        .unwrap_err();
    assert_eq!(err, ApplicationError::OrderNotFound);
}

#[tokio::test]
async fn native_products_page_by_offset_with_unlinked_first() {
    let store = InMemoryStore::new();
    store.seed_native_product(NativeProductBuilder::new("KK-1").linked_to(4).minutes_after_base(50).build());
    store.seed_native_product(NativeProductBuilder::new("KK-2").minutes_after_base(10).build());
    store.seed_native_product(NativeProductBuilder::new("KK-3").minutes_after_base(20).build());
    store.seed_native_product(NativeProductBuilder::new("KL-9").source(Source::Klook).region(Region::Kr).build());
    let services = build_services(&store);

    let mut params = native_params(Region::Jp);
    params.limit = Some(2);
    let first = services
        .native_products
        .list_native_products(ListRequest::Params(params))
        .await
        .unwrap();
    let ids: Vec<_> = first.items.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, ["KK-3", "KK-2"]);

    let token = first.next_key.unwrap();
    assert_eq!(decode_next_key(&token).unwrap()["offset"], 2);
    let second = services
        .native_products
        .list_native_products(ListRequest::NextKey(token))
        .await
        .unwrap();
    assert_eq!(second.items.len(), 1);
    assert_eq!(second.items[0].id, "KK-1");
    assert_eq!(second.next_key, None);

    let mut unlinked = native_params(Region::Jp);
    unlinked.no_product_id = true;
    unlinked.name = Some("kk-2 DAY".into());
    let found = services
        .native_products
        .list_native_products(ListRequest::Params(unlinked))
        .await
        .unwrap();
    assert_eq!(found.items.len(), 1);
    assert_eq!(found.items[0].id, "KK-2");
}

#[tokio::test]
async fn native_name_filter_matches_wildcard_characters_literally() {
    let store = InMemoryStore::new();
    store.seed_native_product(NativeProductBuilder::new("KK-1").name("bus_pass 100%").build());
    store.seed_native_product(NativeProductBuilder::new("KK-2").name("busXpass 1000").build());
    let services = build_services(&store);

    for needle in ["s_p", "100%"] {
        let mut params = native_params(Region::Jp);
        params.name = Some(needle.into());
        let found = services
            .native_products
            .list_native_products(ListRequest::Params(params))
            .await
            .unwrap();
        let ids: Vec<_> = found.items.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["KK-1"], "{needle}");
    }

    let mut params = native_params(Region::Jp);
    params.name = Some("%".into());
    let found = services
        .native_products
        .list_native_products(ListRequest::Params(params))
        .await
        .unwrap();
    assert_eq!(found.items.len(), 1);
}

#[tokio::test]
async fn native_product_filters_must_not_conflict() {
    let services = build_services(&InMemoryStore::new());
    let mut params = native_params(Region::Jp);
    params.product_id = Some(1);
    params.no_product_id = true;

    let err = services
        .native_products
        .list_native_products(ListRequest::Params(params))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "0002");

    let forged = encode_next_key(&json!({
        "region": "JP", "limit": 30, "productId": 1, "noProductId": true
    }))
    .unwrap();
    let err = services
        .native_products
        .list_native_products(ListRequest::NextKey(forged))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "0007");
}

#[tokio::test]
async fn link_and_unlink_move_a_native_product() {
    let store = InMemoryStore::new();
    store.seed_native_product(NativeProductBuilder::new("KK-5").build());
    let services = build_services(&store);
    let product = services
        .products
        .create_product(CreateProductCommand {
            name: "Kyoto walk".into(),
            region: Region::Jp,
        })
        .await
        .unwrap();
    let id = kiosk_core::domain::product::ProductId(product.id);
    let link = || LinkNativeProductCommand {
        native_product_id: "KK-5".into(),
        source: Source::Kkday,
    };

    services.products.link_product(id, link()).await.unwrap();
    assert_eq!(store.native_product("KK-5", Source::Kkday).unwrap().product_id, Some(id));

    services.products.unlink_product(id, link()).await.unwrap();
    assert_eq!(store.native_product("KK-5", Source::Kkday).unwrap().product_id, None);

    let err = services.products.unlink_product(id, link()).await.unwrap_err();
    assert_eq!(err, ApplicationError::NativeProductNotFound);
}

#[tokio::test]
async fn comment_rules_and_cascades() {
    let store = InMemoryStore::new();
    let services = build_services(&store);
    let (author, _) = sign_in().await;
    let (stranger, _) = sign_in().await;

    let post = services
        .posts
        .create_post(
            &author,
            CreatePostCommand {
                title: "Trip notes".into(),
                content: "day one".into(),
            },
        )
        .await
        .unwrap();
    let other_post = services
        .posts
        .create_post(
            &author,
            CreatePostCommand {
                title: "Other".into(),
                content: "x".into(),
            },
        )
        .await
        .unwrap();
    let post_id = PostId(post.id);

    let top = services
        .comments
        .create_comment(
            &author,
            CreateCommentCommand {
                content: "first".into(),
                post_id,
                parent_id: None,
            },
        )
        .await
        .unwrap();
    let reply = services
        .comments
        .create_comment(
            &stranger,
            CreateCommentCommand {
                content: "agreed".into(),
                post_id,
                parent_id: Some(CommentId(top.id)),
            },
        )
        .await
        .unwrap();

    let nested = services
        .comments
        .create_comment(
            &author,
            CreateCommentCommand {
                content: "deeper".into(),
                post_id,
                parent_id: Some(CommentId(reply.id)),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(nested, ApplicationError::CommentOnSubcomment);

    let crossed = services
        .comments
        .create_comment(
            &author,
            CreateCommentCommand {
                content: "wrong post".into(),
                post_id: PostId(other_post.id),
                parent_id: Some(CommentId(top.id)),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(crossed, ApplicationError::ParentCommentNotMatchWithPost);

    let top_level = services
        .comments
        .list_comments(ListRequest::Params(ListCommentsParams {
            limit: None,
            post_id: post.id,
            parent_id: None,
        }))
        .await
        .unwrap();
    assert_eq!(top_level.items.len(), 1);
    let replies = services
        .comments
        .list_comments(ListRequest::Params(ListCommentsParams {
            limit: None,
            post_id: post.id,
            parent_id: Some(top.id),
        }))
        .await
        .unwrap();
    assert_eq!(replies.items[0].id, reply.id);

    let with_comments = services
        .posts
        .get_post(post_id, GetPostParams { with_comments: true })
        .await
        .unwrap();
    assert_eq!(with_comments.comments.map(|c| c.len()), Some(1));

    let denied = services
        .comments
        .delete_comment(&stranger, CommentId(top.id))
        .await
        .unwrap_err();
    assert_eq!(denied, ApplicationError::NoPermission);

    services.posts.delete_post(&author, post_id).await.unwrap();
    assert!(store.is_comment_deleted(CommentId(top.id)));
    assert!(store.is_comment_deleted(CommentId(reply.id)));
    let gone = services
        .comments
        .list_comments(ListRequest::Params(ListCommentsParams {
            limit: None,
            post_id: post.id,
            parent_id: None,
        }))
        .await
        .unwrap_err();
    assert_eq!(gone, ApplicationError::PostNotFound);
}
