//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in geev-core.

mod entry;
mod error;
mod interaction;

pub use entry::PgEntryRepository;
pub use interaction::PgInteractionRepository;
