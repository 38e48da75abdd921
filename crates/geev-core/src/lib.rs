//! # geev-core
//!
//! Domain layer containing entities, value objects and repository traits for post interactions.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Interaction, InteractionKind, PostStats};
pub use error::DomainError;
pub use traits::{EntryRepository, InteractionRepository, RepoResult};
pub use value_objects::{PostId, UserId};
