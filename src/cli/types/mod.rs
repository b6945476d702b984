//! Type-safe wrappers and enums for club statistics data.

pub mod ids;
pub mod sport;

pub use ids::{MatchId, PlayerId, TeamId};
pub use sport::Sport;
