//! Post stats handler

use axum::extract::State;
use geev_service::{StatsResponse, StatsService};

use crate::extractors::PostIdPath;
use crate::response::{ApiError, ApiResult, Envelope};
use crate::state::AppState;

/// Aggregate like, burn and entry counts for a post
///
/// GET /posts/{post_id}/stats
pub async fn get_post_stats(
    State(state): State<AppState>,
    PostIdPath(post_id): PostIdPath,
) -> ApiResult<StatsResponse> {
    let stats = StatsService::new(state.service_context())
        .post_stats(&post_id)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch stats", e))?;
    Ok(Envelope::Success(stats))
}
