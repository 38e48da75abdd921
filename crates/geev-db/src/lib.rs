//! # geev-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `geev-core`:
//!
//! - Connection pool management and bundled migrations
//! - Entity -> row mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use geev_db::pool::{create_pool, DatabaseConfig};
//! use geev_db::repositories::PgInteractionRepository;
//! use geev_core::traits::InteractionRepository;
//!
//! async fn example(app_config: &geev_common::AppConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from(&app_config.database);
//!     let pool = create_pool(&config).await?;
//!     let repo = PgInteractionRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgEntryRepository, PgInteractionRepository};
