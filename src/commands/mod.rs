//! Command implementations for the pitch-stats CLI

pub mod common;
pub mod import;
pub mod injury_risk;
pub mod rankings;
pub mod sports;
pub mod standings;
pub mod team_stats;

#[cfg(test)]
mod tests;

pub use common::CommandContext;
