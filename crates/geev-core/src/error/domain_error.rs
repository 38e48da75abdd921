//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
///
/// Interactions have no business-rule failures of their own: a duplicate
/// interaction is a no-op and a missing post counts zero. What remains are
/// store failures surfaced through the repository traits.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for logs
    pub fn code(&self) -> &'static str {
        match self {
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }
}
