//! In-memory repositories for tests
//!
//! Behave like the PostgreSQL repositories (unique `(user, post, kind)`,
//! conflict-ignoring inserts) and can be told to fail on demand.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use geev_core::entities::{Interaction, InteractionKind};
use geev_core::error::DomainError;
use geev_core::traits::{EntryRepository, InteractionRepository, RepoResult};
use geev_core::value_objects::{PostId, UserId};

use crate::services::ServiceContext;

fn injected_failure(operation: &str) -> DomainError {
    DomainError::DatabaseError(format!("injected failure: {operation}"))
}

#[derive(Default)]
struct InteractionState {
    rows: Vec<Interaction>,
    fail_writes: bool,
    fail_reads: bool,
    operations: usize,
}

/// In-memory implementation of InteractionRepository
#[derive(Default)]
pub struct InMemoryInteractionRepository {
    state: Mutex<InteractionState>,
}

impl InMemoryInteractionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make inserts and deletes fail with a database error
    pub fn fail_writes(&self, fail: bool) {
        self.state.lock().fail_writes = fail;
    }

    /// Make finds and counts fail with a database error
    pub fn fail_reads(&self, fail: bool) {
        self.state.lock().fail_reads = fail;
    }

    /// Add `n` interactions of `kind` on `post_id`, each from a distinct user
    pub fn seed(&self, post_id: &PostId, kind: InteractionKind, n: usize) {
        let mut state = self.state.lock();
        for i in 0..n {
            let user_id = UserId::new(format!("seed-{kind}-{i}"));
            state.rows.push(Interaction::new(user_id, post_id.clone(), kind));
        }
    }

    /// Number of stored interactions
    pub fn len(&self) -> usize {
        self.state.lock().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `(user, post, kind)` is stored; not counted as an operation
    pub fn contains(&self, user_id: &UserId, post_id: &PostId, kind: InteractionKind) -> bool {
        self.state
            .lock()
            .rows
            .iter()
            .any(|row| row.matches(user_id, post_id, kind))
    }

    /// Number of repository calls made so far, failed ones included
    pub fn operation_count(&self) -> usize {
        self.state.lock().operations
    }
}

#[async_trait]
impl InteractionRepository for InMemoryInteractionRepository {
    async fn create_if_absent(&self, interaction: &Interaction) -> RepoResult<()> {
        let mut state = self.state.lock();
        state.operations += 1;
        if state.fail_writes {
            return Err(injected_failure("create_if_absent"));
        }
        let exists = state.rows.iter().any(|row| {
            row.matches(&interaction.user_id, &interaction.post_id, interaction.kind)
        });
        if !exists {
            state.rows.push(interaction.clone());
        }
        Ok(())
    }

    async fn delete(&self, user_id: &UserId, post_id: &PostId, kind: InteractionKind) -> RepoResult<u64> {
        let mut state = self.state.lock();
        state.operations += 1;
        if state.fail_writes {
            return Err(injected_failure("delete"));
        }
        let before = state.rows.len();
        state.rows.retain(|row| !row.matches(user_id, post_id, kind));
        Ok((before - state.rows.len()) as u64)
    }

    async fn count(&self, post_id: &PostId, kind: InteractionKind) -> RepoResult<i64> {
        let mut state = self.state.lock();
        state.operations += 1;
        if state.fail_reads {
            return Err(injected_failure("count"));
        }
        let n = state
            .rows
            .iter()
            .filter(|row| &row.post_id == post_id && row.kind == kind)
            .count();
        Ok(n as i64)
    }
}

#[derive(Default)]
struct EntryState {
    counts: HashMap<PostId, i64>,
    fail: bool,
}

/// In-memory implementation of EntryRepository
#[derive(Default)]
pub struct InMemoryEntryRepository {
    state: Mutex<EntryState>,
}

impl InMemoryEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of entries attached to `post_id`
    pub fn set_entries(&self, post_id: &PostId, n: i64) {
        self.state.lock().counts.insert(post_id.clone(), n);
    }

    /// Make counts fail with a database error
    pub fn fail(&self, fail: bool) {
        self.state.lock().fail = fail;
    }
}

#[async_trait]
impl EntryRepository for InMemoryEntryRepository {
    async fn count_by_post(&self, post_id: &PostId) -> RepoResult<i64> {
        let state = self.state.lock();
        if state.fail {
            return Err(injected_failure("count_by_post"));
        }
        Ok(state.counts.get(post_id).copied().unwrap_or_default())
    }
}

/// A service context wired to fresh in-memory repositories
///
/// The repositories are returned alongside so tests can seed them and inject
/// failures.
pub fn in_memory_context() -> (
    ServiceContext,
    Arc<InMemoryInteractionRepository>,
    Arc<InMemoryEntryRepository>,
) {
    let interactions = Arc::new(InMemoryInteractionRepository::new());
    let entries = Arc::new(InMemoryEntryRepository::new());
    let ctx = ServiceContext::new(None, interactions.clone(), entries.clone());
    (ctx, interactions, entries)
}
