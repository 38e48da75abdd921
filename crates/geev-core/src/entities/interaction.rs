//! Interaction entity - a single user's reaction to a post

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{PostId, UserId};

/// Kind of interaction a user can have with a post
///
/// Stored as lowercase text (`like` / `burn`) in the `type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Like,
    Burn,
}

impl InteractionKind {
    /// Database / wire representation
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Burn => "burn",
        }
    }

    /// Past-tense form used as the flag name in toggle responses (`liked`, `burned`)
    #[inline]
    pub const fn past_tense(self) -> &'static str {
        match self {
            Self::Like => "liked",
            Self::Burn => "burned",
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interaction entity
///
/// At most one row exists per `(user_id, post_id, kind)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    pub user_id: UserId,
    pub post_id: PostId,
    pub kind: InteractionKind,
    pub created_at: DateTime<Utc>,
}

impl Interaction {
    /// Create a new Interaction stamped with the current time
    pub fn new(user_id: UserId, post_id: PostId, kind: InteractionKind) -> Self {
        Self {
            user_id,
            post_id,
            kind,
            created_at: Utc::now(),
        }
    }

    /// Whether this interaction is identified by the given key
    pub fn matches(&self, user_id: &UserId, post_id: &PostId, kind: InteractionKind) -> bool {
        self.kind == kind && &self.user_id == user_id && &self.post_id == post_id
    }
}
