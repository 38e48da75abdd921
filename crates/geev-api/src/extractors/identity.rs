//! Caller identity resolution
//!
//! An [`IdentityResolver`] turns request parts into the caller's user id.
//! Missing or unusable credentials resolve to `None`; deciding whether that
//! is an error is left to the extractor.

use async_trait::async_trait;
use axum::http::request::Parts;
use axum_extra::{
    extract::cookie::CookieJar,
    headers::{authorization::Bearer, Authorization, HeaderMapExt},
};
use geev_common::JwtService;
use geev_core::UserId;
use tracing::debug;

/// Resolves the authenticated user for a request
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    async fn resolve(&self, parts: &Parts) -> Option<UserId>;
}

/// Identity from a JWT in the `Authorization: Bearer` header or the auth cookie
///
/// The header wins when both are present. Only the first token found is
/// verified.
#[derive(Clone)]
pub struct JwtIdentityResolver {
    jwt: JwtService,
    cookie_name: String,
}

impl JwtIdentityResolver {
    pub fn new(jwt: JwtService, cookie_name: impl Into<String>) -> Self {
        Self {
            jwt,
            cookie_name: cookie_name.into(),
        }
    }

    fn token(&self, parts: &Parts) -> Option<String> {
        if let Some(Authorization(bearer)) = parts.headers.typed_get::<Authorization<Bearer>>() {
            return Some(bearer.token().to_owned());
        }

        CookieJar::from_headers(&parts.headers)
            .get(&self.cookie_name)
            .map(|cookie| cookie.value().to_owned())
    }
}

#[async_trait]
impl IdentityResolver for JwtIdentityResolver {
    async fn resolve(&self, parts: &Parts) -> Option<UserId> {
        let token = self.token(parts)?;

        match self.jwt.verify_token(&token).and_then(|claims| claims.user_id()) {
            Ok(user_id) => Some(user_id),
            Err(e) => {
                debug!(error = %e, code = e.error_code(), "Rejected identity token");
                None
            }
        }
    }
}
