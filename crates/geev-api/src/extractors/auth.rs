//! Authentication extractor
//!
//! Resolves the caller through the state's [`IdentityResolver`] and rejects
//! the request with 401 when no identity is found.
//!
//! [`IdentityResolver`]: super::IdentityResolver

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use geev_core::UserId;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from the request
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: UserId,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let user_id = app_state
            .identity_resolver()
            .resolve(parts)
            .await
            .ok_or(ApiError::Unauthorized)?;

        Ok(AuthUser::new(user_id))
    }
}
