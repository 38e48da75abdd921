//! Interaction entity -> row values

use chrono::{DateTime, Utc};
use geev_core::entities::Interaction;

/// Borrowed column values for inserting an Interaction
pub struct InteractionInsert<'a> {
    pub user_id: &'a str,
    pub post_id: &'a str,
    pub kind: &'static str,
    pub created_at: DateTime<Utc>,
}

impl<'a> InteractionInsert<'a> {
    pub fn new(interaction: &'a Interaction) -> Self {
        Self {
            user_id: interaction.user_id.as_str(),
            post_id: interaction.post_id.as_str(),
            kind: interaction.kind.as_str(),
            created_at: interaction.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geev_core::{InteractionKind, PostId, UserId};

    #[test]
    fn test_insert_values() {
        let interaction = Interaction::new(UserId::from("u1"), PostId::from("p1"), InteractionKind::Like);
        let insert = InteractionInsert::new(&interaction);
        assert_eq!(insert.user_id, "u1");
        assert_eq!(insert.post_id, "p1");
        assert_eq!(insert.kind, "like");
        assert_eq!(insert.created_at, interaction.created_at);
    }
}
