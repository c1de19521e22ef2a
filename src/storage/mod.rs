//! Storage layer for the fantasy pipeline
//!
//! Flat tabular snapshots only, organized into logical components:
//! - `models`: Typed records for teams, players, usage and scoreboard rows
//! - `schema`: Required columns and header validation
//! - `queries`: The read-only roster store and its lookups
//! - `tables`: CSV readers and writers

pub mod models;
pub mod queries;
pub mod schema;
pub mod tables;


// Re-export the main types for easy access
pub use models::*;
pub use queries::RosterStore;
pub use tables::{
    load_roster, read_performance_stats, read_players, read_scoreboard, read_teams,
    write_scoreboard, write_usage,
};
