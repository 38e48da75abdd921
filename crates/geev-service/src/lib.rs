//! # geev-service
//!
//! Application layer containing the interaction and stats services, their
//! dependency container and response DTOs.

pub mod dto;
pub mod services;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use dto::{HealthChecks, HealthResponse, ReadinessResponse, StatsResponse, ToggleResponse};
pub use services::{InteractionService, ServiceContext, ServiceError, ServiceResult, StatsService};
