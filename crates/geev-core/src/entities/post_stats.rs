//! Post stats - point-in-time engagement counts for a post

use serde::Serialize;

/// Aggregated engagement counts for a single post
///
/// Each count comes from an independent query, so the three values are not
/// guaranteed to describe the same instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PostStats {
    pub likes: i64,
    pub burns: i64,
    pub entries: i64,
}

impl PostStats {
    /// Create a new PostStats
    pub fn new(likes: i64, burns: i64, entries: i64) -> Self {
        Self {
            likes,
            burns,
            entries,
        }
    }
}
