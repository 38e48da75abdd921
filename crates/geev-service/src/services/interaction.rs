//! Interaction service
//!
//! Activates and deactivates like/burn interactions for a user on a post.

use geev_core::entities::{Interaction, InteractionKind};
use geev_core::value_objects::{PostId, UserId};
use tracing::{info, instrument};

use crate::dto::ToggleResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Interaction service
pub struct InteractionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> InteractionService<'a> {
    /// Create a new InteractionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Ensure the user's interaction of `kind` exists on the post
    ///
    /// Repeating the call is a no-op. The returned count is read after the
    /// write and may already include concurrent changes by other users.
    #[instrument(skip(self))]
    pub async fn activate(
        &self,
        user_id: &UserId,
        post_id: &PostId,
        kind: InteractionKind,
    ) -> ServiceResult<ToggleResponse> {
        let interaction = Interaction::new(user_id.clone(), post_id.clone(), kind);
        self.ctx.interaction_repo().create_if_absent(&interaction).await?;

        let count = self.ctx.interaction_repo().count(post_id, kind).await?;

        info!(
            post_id = %post_id,
            user_id = %user_id,
            kind = %kind,
            count,
            "Interaction activated"
        );

        Ok(ToggleResponse::new(kind, true, count))
    }

    /// Remove the user's interaction of `kind` from the post
    ///
    /// Removing an interaction that does not exist is not an error.
    #[instrument(skip(self))]
    pub async fn deactivate(
        &self,
        user_id: &UserId,
        post_id: &PostId,
        kind: InteractionKind,
    ) -> ServiceResult<ToggleResponse> {
        let removed = self.ctx.interaction_repo().delete(user_id, post_id, kind).await?;

        let count = self.ctx.interaction_repo().count(post_id, kind).await?;

        info!(
            post_id = %post_id,
            user_id = %user_id,
            kind = %kind,
            removed,
            count,
            "Interaction deactivated"
        );

        Ok(ToggleResponse::new(kind, false, count))
    }
}
