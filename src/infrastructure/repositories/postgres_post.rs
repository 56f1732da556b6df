// src/infrastructure/repositories/postgres_post.rs
use super::{
    map_sqlx,
    paging::{push_after_key, push_order_by, push_window},
};
use crate::domain::errors::{DomainError, DomainResult, Entity};
use crate::domain::identity::UserId;
use crate::domain::pagination::{PageStart, QueryOf};
use crate::domain::post::{NewPost, Post, PostId, PostListing, PostRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, Transaction};
use uuid::Uuid;

const POST_COLUMNS: &str = "p.id, p.title, p.content, p.like_count, p.author_id, p.created_at";

#[derive(Clone)]
pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Locks the live post row for the rest of the transaction.
    async fn lock_author(
        tx: &mut Transaction<'_, Postgres>,
        id: PostId,
    ) -> DomainResult<UserId> {
        let author: Option<Uuid> = sqlx::query_scalar(
            "SELECT author_id FROM posts WHERE id = $1 AND deleted_at IS NULL FOR UPDATE",
        )
        .bind(id.0)
        .fetch_optional(&mut **tx)
        .await
        .map_err(map_sqlx)?;

        author
            .map(UserId)
            .ok_or(DomainError::NotFound(Entity::Post))
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: Uuid,
    title: String,
    content: String,
    like_count: i64,
    author_id: Uuid,
    created_at: DateTime<Utc>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Post {
            id: PostId(row.id),
            title: row.title,
            content: row.content,
            like_count: row.like_count,
            author_id: UserId(row.author_id),
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts p WHERE p.id = $1 AND p.deleted_at IS NULL"
        ))
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(Post::from))
    }

    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            content,
            author_id,
            created_at,
        } = post;

        let row = sqlx::query_as::<_, PostRow>(
            "INSERT INTO posts (title, content, author_id, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, title, content, like_count, author_id, created_at",
        )
        .bind(title)
        .bind(content)
        .bind(author_id.0)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.into())
    }

    async fn list(&self, query: QueryOf<PostListing>) -> DomainResult<Vec<Post>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {POST_COLUMNS} FROM posts p WHERE p.deleted_at IS NULL"
        ));

        if let Some(author_id) = query.filters.author_id {
            builder.push(" AND p.author_id = ");
            builder.push_bind(author_id.0);
        }
        if let PageStart::AfterKey(anchor) = &query.start {
            push_after_key(&mut builder, "p", "posts", &query.sort, anchor.0)?;
        }
        push_order_by(&mut builder, "p", &query.sort);
        push_window(&mut builder, &query.start, query.limit_i64());

        let rows = builder
            .build_query_as::<PostRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn delete(&self, id: PostId, user_id: UserId) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        if Self::lock_author(&mut tx, id).await? != user_id {
            return Err(DomainError::NoPermission);
        }

        sqlx::query("UPDATE posts SET deleted_at = NOW() WHERE id = $1")
            .bind(id.0)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        sqlx::query("UPDATE comments SET deleted_at = NOW() WHERE post_id = $1 AND deleted_at IS NULL")
            .bind(id.0)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)
    }

    async fn like(&self, id: PostId, user_id: UserId) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        Self::lock_author(&mut tx, id).await?;

        sqlx::query("INSERT INTO post_likes (post_id, user_id) VALUES ($1, $2)")
            .bind(id.0)
            .bind(user_id.0)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        sqlx::query("UPDATE posts SET like_count = like_count + 1 WHERE id = $1")
            .bind(id.0)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)
    }

    async fn unlike(&self, id: PostId, user_id: UserId) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        Self::lock_author(&mut tx, id).await?;

        let removed = sqlx::query("DELETE FROM post_likes WHERE post_id = $1 AND user_id = $2")
            .bind(id.0)
            .bind(user_id.0)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        if removed.rows_affected() == 0 {
            return Err(DomainError::PostNotLiked);
        }
        sqlx::query("UPDATE posts SET like_count = like_count - 1 WHERE id = $1")
            .bind(id.0)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)
    }
}
