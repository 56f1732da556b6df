// src/domain/comment/listing.rs
use super::entity::{Comment, CommentId};
use crate::domain::{
    pagination::{FilterRules, KeysetCursor, Listing, PageLimit, SortKey, SortSpec},
    post::PostId,
};
use serde::{Deserialize, Serialize};

/// Without `parentId` only top-level comments are listed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentFilters {
    pub post_id: PostId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<CommentId>,
}

impl FilterRules for CommentFilters {}

const NEWEST_KEYS: &[SortKey] = &[SortKey::desc("created_at"), SortKey::desc("id")];

pub struct CommentListing;

impl Listing for CommentListing {
    type Filters = CommentFilters;
    type Cursor = KeysetCursor<CommentId>;
    type Record = Comment;

    const NAME: &'static str = "comments";
    const DEFAULT_LIMIT: PageLimit = PageLimit::from_const(15);

    fn sort(_: &CommentFilters) -> SortSpec {
        SortSpec::new(NEWEST_KEYS)
    }
}
