//! Axum extractors for request handling

mod auth;
mod identity;
mod path;

pub use auth::AuthUser;
pub use identity::{IdentityResolver, JwtIdentityResolver};
pub use path::PostIdPath;
