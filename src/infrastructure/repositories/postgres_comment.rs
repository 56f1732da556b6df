// src/infrastructure/repositories/postgres_comment.rs
use super::{
    map_sqlx,
    paging::{push_after_key, push_order_by, push_window},
};
use crate::domain::comment::{Comment, CommentId, CommentListing, CommentRepository, NewComment};
use crate::domain::errors::{DomainError, DomainResult, Entity};
use crate::domain::identity::UserId;
use crate::domain::pagination::{PageStart, QueryOf};
use crate::domain::post::PostId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const COMMENT_COLUMNS: &str = "c.id, c.content, c.post_id, c.parent_id, c.author_id, c.created_at";

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: Uuid,
    content: String,
    post_id: Uuid,
    parent_id: Option<Uuid>,
    author_id: Uuid,
    created_at: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment {
            id: CommentId(row.id),
            content: row.content,
            post_id: PostId(row.post_id),
            parent_id: row.parent_id.map(CommentId),
            author_id: UserId(row.author_id),
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments c WHERE c.id = $1 AND c.deleted_at IS NULL"
        ))
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(Comment::from))
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            content,
            post_id,
            parent_id,
            author_id,
            created_at,
        } = comment;

        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (content, post_id, parent_id, author_id, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, content, post_id, parent_id, author_id, created_at",
        )
        .bind(content)
        .bind(post_id.0)
        .bind(parent_id.map(|id| id.0))
        .bind(author_id.0)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.into())
    }

    async fn list(&self, query: QueryOf<CommentListing>) -> DomainResult<Vec<Comment>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {COMMENT_COLUMNS} FROM comments c WHERE c.deleted_at IS NULL AND c.post_id = "
        ));
        builder.push_bind(query.filters.post_id.0);

        match query.filters.parent_id {
            Some(parent_id) => {
                builder.push(" AND c.parent_id = ");
                builder.push_bind(parent_id.0);
            }
            None => {
                builder.push(" AND c.parent_id IS NULL");
            }
        }
        if let PageStart::AfterKey(anchor) = &query.start {
            push_after_key(&mut builder, "c", "comments", &query.sort, anchor.0)?;
        }
        push_order_by(&mut builder, "c", &query.sort);
        push_window(&mut builder, &query.start, query.limit_i64());

        let rows = builder
            .build_query_as::<CommentRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn delete(&self, id: CommentId, user_id: UserId) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let author: Option<Uuid> = sqlx::query_scalar(
            "SELECT author_id FROM comments WHERE id = $1 AND deleted_at IS NULL FOR UPDATE",
        )
        .bind(id.0)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        match author.map(UserId) {
            None => return Err(DomainError::NotFound(Entity::Comment)),
            Some(author) if author != user_id => return Err(DomainError::NoPermission),
            Some(_) => {}
        }

        // Replies go with their top-level comment.
        sqlx::query(
            "UPDATE comments SET deleted_at = NOW()
             WHERE (id = $1 OR parent_id = $1) AND deleted_at IS NULL",
        )
        .bind(id.0)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)
    }
}
