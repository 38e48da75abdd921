//! PostgreSQL implementation of InteractionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use geev_core::entities::{Interaction, InteractionKind};
use geev_core::traits::{InteractionRepository, RepoResult};
use geev_core::value_objects::{PostId, UserId};

use crate::mappers::InteractionInsert;

use super::error::map_db_error;

/// PostgreSQL implementation of InteractionRepository
#[derive(Clone)]
pub struct PgInteractionRepository {
    pool: PgPool,
}

impl PgInteractionRepository {
    /// Create a new PgInteractionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InteractionRepository for PgInteractionRepository {
    #[instrument(skip(self))]
    async fn create_if_absent(&self, interaction: &Interaction) -> RepoResult<()> {
        let insert = InteractionInsert::new(interaction);

        sqlx::query(
            r#"
            INSERT INTO interactions (user_id, post_id, type, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, post_id, type) DO NOTHING
            "#,
        )
        .bind(insert.user_id)
        .bind(insert.post_id)
        .bind(insert.kind)
        .bind(insert.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, user_id: &UserId, post_id: &PostId, kind: InteractionKind) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM interactions
            WHERE user_id = $1 AND post_id = $2 AND type = $3
            "#,
        )
        .bind(user_id.as_str())
        .bind(post_id.as_str())
        .bind(kind.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn count(&self, post_id: &PostId, kind: InteractionKind) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM interactions
            WHERE post_id = $1 AND type = $2
            "#,
        )
        .bind(post_id.as_str())
        .bind(kind.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}
