//! Storage layer for match results and rosters
//!
//! This module provides a thin abstraction over the SQLite database that
//! stands in for the platform's persistence layer:
//! - `models`: Stored match and roster shapes
//! - `schema`: Database connection and schema management
//! - `queries`: Inserts and the read queries the aggregators consume

pub mod models;
pub mod queries;
pub mod schema;


pub use models::*;
pub use queries::DEFAULT_MATCH_LIMIT;
pub use schema::MatchDatabase;
