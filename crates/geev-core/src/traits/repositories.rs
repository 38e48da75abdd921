//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Interaction, InteractionKind};
use crate::error::DomainError;
use crate::value_objects::{PostId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Interaction Repository
// ============================================================================

#[async_trait]
pub trait InteractionRepository: Send + Sync {
    /// Insert an interaction, doing nothing if `(user, post, kind)` already exists
    ///
    /// A unique-key conflict is success, not an error.
    async fn create_if_absent(&self, interaction: &Interaction) -> RepoResult<()>;

    /// Delete every interaction matching `(user, post, kind)`
    ///
    /// Returns the number of rows removed (zero or one under the unique key).
    async fn delete(&self, user_id: &UserId, post_id: &PostId, kind: InteractionKind) -> RepoResult<u64>;

    /// Count interactions of one kind on a post across all users
    async fn count(&self, post_id: &PostId, kind: InteractionKind) -> RepoResult<i64>;
}

// ============================================================================
// Entry Repository
// ============================================================================

#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Count entries attached to a post
    async fn count_by_post(&self, post_id: &PostId) -> RepoResult<i64>;
}
