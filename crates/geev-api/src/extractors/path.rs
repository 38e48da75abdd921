//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use geev_core::PostId;

use crate::response::ApiError;

/// The `:post_id` segment of a post route
///
/// Any id that decodes is accepted as-is; a segment that cannot be decoded
/// (e.g. percent-encoded invalid UTF-8) is rejected inside the envelope.
#[derive(Debug, Clone)]
pub struct PostIdPath(pub PostId);

#[async_trait]
impl<S> FromRequestParts<S> for PostIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(post_id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(ApiError::InvalidPath)?;

        Ok(PostIdPath(PostId::new(post_id)))
    }
}
