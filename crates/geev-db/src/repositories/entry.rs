//! PostgreSQL implementation of EntryRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use geev_core::traits::{EntryRepository, RepoResult};
use geev_core::value_objects::PostId;

use super::error::map_db_error;

/// PostgreSQL implementation of EntryRepository
#[derive(Clone)]
pub struct PgEntryRepository {
    pool: PgPool,
}

impl PgEntryRepository {
    /// Create a new PgEntryRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntryRepository for PgEntryRepository {
    #[instrument(skip(self))]
    async fn count_by_post(&self, post_id: &PostId) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM entries
            WHERE post_id = $1
            "#,
        )
        .bind(post_id.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}
