//! Interaction handlers
//!
//! Like and burn toggles for the authenticated caller.

use axum::extract::State;
use geev_core::{InteractionKind, PostId};
use geev_service::{InteractionService, ToggleResponse};

use crate::extractors::{AuthUser, PostIdPath};
use crate::response::{ApiError, ApiResult, Envelope};
use crate::state::AppState;

/// Like a post
///
/// POST /posts/{post_id}/like
pub async fn like_post(
    State(state): State<AppState>,
    auth: AuthUser,
    PostIdPath(post_id): PostIdPath,
) -> ApiResult<ToggleResponse> {
    activate(&state, &auth, post_id, InteractionKind::Like).await
}

/// Remove the caller's like
///
/// DELETE /posts/{post_id}/like
pub async fn unlike_post(
    State(state): State<AppState>,
    auth: AuthUser,
    PostIdPath(post_id): PostIdPath,
) -> ApiResult<ToggleResponse> {
    deactivate(&state, &auth, post_id, InteractionKind::Like).await
}

/// Burn a post
///
/// POST /posts/{post_id}/burn
pub async fn burn_post(
    State(state): State<AppState>,
    auth: AuthUser,
    PostIdPath(post_id): PostIdPath,
) -> ApiResult<ToggleResponse> {
    activate(&state, &auth, post_id, InteractionKind::Burn).await
}

/// Remove the caller's burn
///
/// DELETE /posts/{post_id}/burn
pub async fn unburn_post(
    State(state): State<AppState>,
    auth: AuthUser,
    PostIdPath(post_id): PostIdPath,
) -> ApiResult<ToggleResponse> {
    deactivate(&state, &auth, post_id, InteractionKind::Burn).await
}

async fn activate(
    state: &AppState,
    auth: &AuthUser,
    post_id: PostId,
    kind: InteractionKind,
) -> ApiResult<ToggleResponse> {
    let service = InteractionService::new(state.service_context());
    let response = service
        .activate(&auth.user_id, &post_id, kind)
        .await
        .map_err(|e| ApiError::internal(activate_failure(kind), e))?;
    Ok(Envelope::Success(response))
}

async fn deactivate(
    state: &AppState,
    auth: &AuthUser,
    post_id: PostId,
    kind: InteractionKind,
) -> ApiResult<ToggleResponse> {
    let service = InteractionService::new(state.service_context());
    let response = service
        .deactivate(&auth.user_id, &post_id, kind)
        .await
        .map_err(|e| ApiError::internal(deactivate_failure(kind), e))?;
    Ok(Envelope::Success(response))
}

fn activate_failure(kind: InteractionKind) -> &'static str {
    match kind {
        InteractionKind::Like => "Failed to like post",
        InteractionKind::Burn => "Failed to burn post",
    }
}

fn deactivate_failure(kind: InteractionKind) -> &'static str {
    match kind {
        InteractionKind::Like => "Failed to unlike post",
        InteractionKind::Burn => "Failed to unburn post",
    }
}
