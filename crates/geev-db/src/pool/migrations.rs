//! Bundled schema migrations
//!
//! Migrations are loaded from disk at runtime so the crate does not need the
//! `sqlx` macros feature. The default directory is this crate's `migrations/`
//! in the source tree; deployed binaries point `DATABASE_MIGRATIONS_DIR` at a
//! shipped copy instead.

use std::path::Path;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;
use tracing::info;

/// Source-tree directory holding the SQL migrations of this crate
pub const MIGRATIONS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/migrations");

/// Apply all pending migrations from `dir`, or [`MIGRATIONS_DIR`] when `None`
pub async fn run_migrations(pool: &PgPool, dir: Option<&str>) -> Result<(), MigrateError> {
    let migrator = load_migrator(dir).await?;
    info!(count = migrator.iter().count(), "Applying database migrations");
    migrator.run(pool).await
}

async fn load_migrator(dir: Option<&str>) -> Result<Migrator, MigrateError> {
    let dir = Path::new(dir.unwrap_or(MIGRATIONS_DIR));
    info!(dir = %dir.display(), "Loading migrations");
    Migrator::new(dir).await
}
