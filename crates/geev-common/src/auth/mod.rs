//! Identity token utilities

mod jwt;

pub use jwt::{Claims, IdentityPayload, JwtService};
