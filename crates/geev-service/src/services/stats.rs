//! Stats service
//!
//! Aggregates like, burn and entry counts for a post.

use geev_core::entities::{InteractionKind, PostStats};
use geev_core::value_objects::PostId;
use tracing::{debug, instrument};

use crate::dto::StatsResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Stats service
pub struct StatsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatsService<'a> {
    /// Create a new StatsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Count likes, burns and entries for a post
    ///
    /// The three counts run concurrently and are not read from one snapshot.
    /// If any of them fails the others are discarded.
    #[instrument(skip(self))]
    pub async fn post_stats(&self, post_id: &PostId) -> ServiceResult<StatsResponse> {
        let interactions = self.ctx.interaction_repo();

        let (likes, burns, entries) = tokio::try_join!(
            interactions.count(post_id, InteractionKind::Like),
            interactions.count(post_id, InteractionKind::Burn),
            self.ctx.entry_repo().count_by_post(post_id),
        )?;

        debug!(post_id = %post_id, likes, burns, entries, "Post stats fetched");

        Ok(PostStats::new(likes, burns, entries).into())
    }
}
