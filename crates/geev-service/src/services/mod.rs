//! Business logic services
//!
//! Services orchestrate repository calls and shape the results into DTOs.

pub mod context;
pub mod error;
pub mod interaction;
pub mod stats;

// Re-export all services for convenience
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use interaction::InteractionService;
pub use stats::StatsService;
