//! Tag catalog repository implementation.
//!
//! The catalog is globally readable and administratively managed: this
//! repository intentionally exposes no insert, update, or delete — the
//! policy catalog denies those operations for every caller, and the only
//! write path is the seed migration.

use sqlx::PgPool;
use uuid::Uuid;

use mealhub_core::error::{AppError, ErrorKind};
use mealhub_core::result::AppResult;
use mealhub_core::types::pagination::{PageRequest, PageResponse};
use mealhub_entity::tag::{Tag, TagType};

/// Repository for read-only tag catalog queries.
#[derive(Debug, Clone)]
pub struct TagRepository {
    pool: PgPool,
}

impl TagRepository {
    /// Create a new tag repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a tag by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Tag>> {
        sqlx::query_as::<_, Tag>("SELECT * FROM tags WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find tag by id", e))
    }

    /// List the whole catalog with pagination.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Tag>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tags")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count tags", e))?;

        let tags = sqlx::query_as::<_, Tag>(
            "SELECT * FROM tags ORDER BY tag_type ASC, name ASC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list tags", e))?;

        Ok(PageResponse::new(
            tags,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List tags of one category.
    pub async fn find_by_type(
        &self,
        tag_type: TagType,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Tag>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tags WHERE tag_type = $1")
            .bind(tag_type)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count tags by type", e)
            })?;

        let tags = sqlx::query_as::<_, Tag>(
            "SELECT * FROM tags WHERE tag_type = $1 ORDER BY name ASC LIMIT $2 OFFSET $3",
        )
        .bind(tag_type)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list tags by type", e)
        })?;

        Ok(PageResponse::new(
            tags,
            page.page,
            page.page_size,
            total as u64,
        ))
    }
}
