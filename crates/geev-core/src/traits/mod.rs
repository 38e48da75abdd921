//! Repository traits (ports)

mod repositories;

pub use repositories::{EntryRepository, InteractionRepository, RepoResult};
