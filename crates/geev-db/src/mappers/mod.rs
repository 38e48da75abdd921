//! Entity to row mappers
//!
//! `*Insert` structs prepare entity data for database writes.

mod interaction;

pub use interaction::InteractionInsert;
