//! Domain entities - core business objects

mod interaction;
mod post_stats;

pub use interaction::{Interaction, InteractionKind};
pub use post_stats::PostStats;
