// src/domain/post/listing.rs
use super::entity::{Post, PostId};
use crate::domain::{
    identity::UserId,
    pagination::{FilterRules, KeysetCursor, Listing, PageLimit, SortKey, SortSpec},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PostOrder {
    #[default]
    #[serde(rename = "LIKE_DESC")]
    LikeDesc,
    #[serde(rename = "CREATED_AT_DESC")]
    CreatedAtDesc,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostFilters {
    pub order_by: PostOrder,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<UserId>,
}

impl FilterRules for PostFilters {}

const MOST_LIKED_KEYS: &[SortKey] = &[SortKey::desc("like_count"), SortKey::desc("id")];
const NEWEST_KEYS: &[SortKey] = &[SortKey::desc("created_at"), SortKey::desc("id")];

pub const MOST_LIKED: SortSpec = SortSpec::new(MOST_LIKED_KEYS);
pub const NEWEST: SortSpec = SortSpec::new(NEWEST_KEYS);

pub struct PostListing;

impl Listing for PostListing {
    type Filters = PostFilters;
    type Cursor = KeysetCursor<PostId>;
    type Record = Post;

    const NAME: &'static str = "posts";
    const DEFAULT_LIMIT: PageLimit = PageLimit::from_const(15);

    fn sort(filters: &PostFilters) -> SortSpec {
        match filters.order_by {
            PostOrder::LikeDesc => MOST_LIKED,
            PostOrder::CreatedAtDesc => NEWEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn order_selects_sort() {
        let mut filters = PostFilters {
            order_by: PostOrder::LikeDesc,
            author_id: None,
        };
        assert_eq!(PostListing::sort(&filters).keys()[0].column, "like_count");
        filters.order_by = PostOrder::CreatedAtDesc;
        assert_eq!(PostListing::sort(&filters).keys()[0].column, "created_at");
        assert_eq!(PostListing::sort(&filters).tie_break().column, "id");
    }

    #[test]
    fn filters_wire_shape() {
        let filters = PostFilters {
            order_by: PostOrder::CreatedAtDesc,
            author_id: None,
        };
        assert_eq!(
            serde_json::to_value(filters).unwrap(),
            json!({ "orderBy": "CREATED_AT_DESC" })
        );
    }
}
