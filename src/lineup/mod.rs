//! Lineups: slot assignment, scoreboard assembly and the matchup view

pub mod matchup;
pub mod scoreboard;
pub mod slots;

pub use matchup::{build_matchup, render_matchup, LineupConfig, Matchup, SelectionState, Side};
pub use scoreboard::{assemble_scoreboard, format_row};
pub use slots::assign_slots;
