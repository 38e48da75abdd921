//! Route handlers

pub mod health;
pub mod interactions;
pub mod stats;
