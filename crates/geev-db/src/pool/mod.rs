//! Database connection pool management

mod migrations;
mod postgres;

pub use migrations::{run_migrations, MIGRATIONS_DIR};
pub use postgres::{create_pool, DatabaseConfig};

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;
