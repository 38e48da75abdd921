//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. They are the
//! `data` payload of the success envelope.

use chrono::{DateTime, Utc};
use geev_core::{InteractionKind, PostStats};
use serde::ser::{Serialize, SerializeMap, Serializer};

// ============================================================================
// Interaction Responses
// ============================================================================

/// Result of activating or deactivating an interaction
///
/// Serializes with a kind-specific flag name:
/// `{ "liked": true, "count": 3 }` or `{ "burned": false, "count": 0 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleResponse {
    pub kind: InteractionKind,
    /// Whether the caller's interaction exists after the call
    pub active: bool,
    /// Interactions of this kind on the post, across all users
    pub count: i64,
}

impl ToggleResponse {
    pub fn new(kind: InteractionKind, active: bool, count: i64) -> Self {
        Self { kind, active, count }
    }
}

impl Serialize for ToggleResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(self.kind.past_tense(), &self.active)?;
        map.serialize_entry("count", &self.count)?;
        map.end()
    }
}

// ============================================================================
// Stats Responses
// ============================================================================

/// Aggregate engagement counts for a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct StatsResponse {
    pub likes: i64,
    pub burns: i64,
    pub entries: i64,
}

impl From<PostStats> for StatsResponse {
    fn from(stats: PostStats) -> Self {
        Self {
            likes: stats.likes,
            burns: stats.burns,
            entries: stats.entries,
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, serde::Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, serde::Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
