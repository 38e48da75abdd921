//! Service context - dependency container for services
//!
//! Holds the repositories and the database pool needed by services.

use std::sync::Arc;

use geev_core::traits::{EntryRepository, InteractionRepository};
use geev_db::{PgEntryRepository, PgInteractionRepository, PgPool};

/// Service context containing all dependencies
///
/// Cloning is cheap; every field is reference counted.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool, used for readiness checks
    pool: Option<PgPool>,

    // Repositories
    interaction_repo: Arc<dyn InteractionRepository>,
    entry_repo: Arc<dyn EntryRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: Option<PgPool>,
        interaction_repo: Arc<dyn InteractionRepository>,
        entry_repo: Arc<dyn EntryRepository>,
    ) -> Self {
        Self {
            pool,
            interaction_repo,
            entry_repo,
        }
    }

    /// Create a context backed by PostgreSQL repositories sharing `pool`
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(
            Some(pool.clone()),
            Arc::new(PgInteractionRepository::new(pool.clone())),
            Arc::new(PgEntryRepository::new(pool)),
        )
    }

    // === Database Pool ===

    /// Whether a pooled connection can currently be acquired
    ///
    /// Always false when no pool is attached.
    pub async fn database_healthy(&self) -> bool {
        match &self.pool {
            Some(pool) => pool.acquire().await.is_ok(),
            None => false,
        }
    }

    // === Repositories ===

    /// Get the interaction repository
    pub fn interaction_repo(&self) -> &dyn InteractionRepository {
        self.interaction_repo.as_ref()
    }

    /// Get the entry repository
    pub fn entry_repo(&self) -> &dyn EntryRepository {
        self.entry_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .finish()
    }
}
