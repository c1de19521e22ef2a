//! College Football Fantasy Stats Library
//!
//! Turns per-game box scores into fantasy lineup slots and points:
//! box-score parsing (scraped HTML tables or structured JSON summaries),
//! identity resolution against a team-scoped roster, usage aggregation,
//! depth-and-usage slot assignment and scoring.
//!
//! ## Features
//!
//! - **Two payload shapes**: rendered game pages and site API summaries
//! - **Pluggable identity matching**: exact provider ids, substring or exact names
//! - **Batch tolerance**: a failed game is reported and skipped, never fatal
//! - **Deterministic output**: the same inputs always produce the same tables
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use cfb_fantasy::{GameId, MatcherKind, commands::scoreboard::*};
//!
//! # async fn example() -> cfb_fantasy::Result<()> {
//! let run = handle_scoreboard(ScoreboardParams {
//!     players_path: "players.csv".into(),
//!     teams_path: "teams.csv".into(),
//!     stats_path: None,
//!     output_path: "scoreboard.csv".into(),
//!     games: vec![GameId::new(401628374)],
//!     matcher: MatcherKind::default(),
//!     timeout: Duration::from_secs(15),
//!     refresh: false,
//!     cache_dir: None,
//! })
//! .await?;
//! println!("{} slots", run.rows.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the week's games to avoid passing them in every command:
//! ```bash
//! export CFB_FANTASY_GAMES=401628374,401628375
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod espn;
pub mod ingest;
pub mod lineup;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{
    EspnId, GameId, InjuryStatus, MatcherKind, MatchupStyle, PlayerId, Position, TeamId,
};
pub use error::{FantasyError, Result};

pub const GAMES_ENV_VAR: &str = "CFB_FANTASY_GAMES";
