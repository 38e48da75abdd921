//! Test fixtures and data generators
//!
//! Seeds users, posts and entries directly in the database and issues
//! identity tokens for seeded users.

use anyhow::Result;
use geev_common::{IdentityPayload, JwtService};
use geev_core::{PostId, UserId};
use geev_db::PgPool;
use serde::Deserialize;
use uuid::Uuid;

use crate::helpers::TEST_JWT_SECRET;

/// Response envelope as seen by clients
#[derive(Debug, Deserialize)]
pub struct EnvelopeBody<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

/// Stats payload
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct StatsBody {
    pub likes: i64,
    pub burns: i64,
    pub entries: i64,
}

/// Connect to the test database
pub async fn test_pool() -> Result<PgPool> {
    let url = std::env::var("DATABASE_URL")?;
    Ok(PgPool::connect(&url).await?)
}

/// A seeded user with a valid identity token
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: UserId,
    pub token: String,
}

impl TestUser {
    /// Insert a new user row and issue a token for it
    pub async fn create(pool: &PgPool) -> Result<Self> {
        let id = format!("user-{}", Uuid::new_v4());
        let wallet_address = format!("0x{}", Uuid::new_v4().simple());

        sqlx::query("INSERT INTO users (id, wallet_address, username) VALUES ($1, $2, $3)")
            .bind(&id)
            .bind(&wallet_address)
            .bind(&id)
            .execute(pool)
            .await?;

        let payload = IdentityPayload {
            user_id: UserId::new(id.clone()),
            wallet_address,
            username: id.clone(),
        };
        let token = JwtService::new(TEST_JWT_SECRET, 3600).issue_token(&payload)?;

        Ok(Self {
            id: UserId::new(id),
            token,
        })
    }

    /// Delete the user; posts, entries and interactions cascade
    pub async fn cleanup(&self, pool: &PgPool) -> Result<()> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(self.id.as_str())
            .execute(pool)
            .await?;
        Ok(())
    }
}

/// Insert a post owned by `creator`
pub async fn create_post(pool: &PgPool, creator: &TestUser) -> Result<PostId> {
    let id = format!("post-{}", Uuid::new_v4());
    sqlx::query("INSERT INTO posts (id, creator_id, title) VALUES ($1, $2, $3)")
        .bind(&id)
        .bind(creator.id.as_str())
        .bind("Integration test post")
        .execute(pool)
        .await?;
    Ok(PostId::new(id))
}

/// Insert `n` entries on `post` by `user`
pub async fn create_entries(pool: &PgPool, post: &PostId, user: &TestUser, n: usize) -> Result<()> {
    for _ in 0..n {
        sqlx::query("INSERT INTO entries (id, post_id, user_id) VALUES ($1, $2, $3)")
            .bind(format!("entry-{}", Uuid::new_v4()))
            .bind(post.as_str())
            .bind(user.id.as_str())
            .execute(pool)
            .await?;
    }
    Ok(())
}
