//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::{GameId, MatcherKind, MatchupStyle};

use crate::core::http::DEFAULT_TIMEOUT_SECS;

/// Roster inputs shared by the ingestion commands
#[derive(Debug, Args)]
pub struct RosterArgs {
    /// Players table (`player_id, player_name, team_id, position, depth, ...`).
    #[clap(long, default_value = "players.csv")]
    pub players: PathBuf,

    /// Teams table (`team_id, team_name, conference, roster_url`).
    #[clap(long, default_value = "teams.csv")]
    pub teams: PathBuf,
}

/// Game selection and fetch behaviour shared by the ingestion commands
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Game id (repeatable): `-g 401628374 -g 401628375`.
    /// Falls back to the comma-separated `CFB_FANTASY_GAMES` env var.
    #[clap(long = "game", short = 'g')]
    pub games: Vec<GameId>,

    /// Per-request timeout in seconds.
    #[clap(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Force refetch from ESPN, overwriting cached payloads.
    #[clap(long)]
    pub refresh: bool,

    /// How scraped display names are matched against the roster.
    #[clap(long, value_enum, default_value_t = MatcherKind::default())]
    pub matcher: MatcherKind,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scrape game pages and write per-player snap counts.
    Snapcounts {
        #[clap(flatten)]
        roster: RosterArgs,

        #[clap(flatten)]
        fetch: FetchArgs,

        /// Output usage table.
        #[clap(long, short, default_value = "espn_snapcounts.csv")]
        output: PathBuf,
    },

    /// Build the slot scoreboard with fantasy points from game summaries.
    Scoreboard {
        #[clap(flatten)]
        roster: RosterArgs,

        #[clap(flatten)]
        fetch: FetchArgs,

        /// Optional per-player stats table
        /// (`player_id, rushing_yards, receiving_yards, passing_yards, tds, int`).
        #[clap(long)]
        stats: Option<PathBuf>,

        /// Output scoreboard table.
        #[clap(long, short, default_value = "scoreboard.csv")]
        output: PathBuf,
    },

    /// Render a two-team matchup from a scoreboard table.
    Matchup {
        /// Scoreboard table to read.
        #[clap(long, default_value = "scoreboard.csv")]
        scoreboard: PathBuf,

        /// Slot to start (repeatable), e.g. `--select "Alabama RB3"`.
        #[clap(long = "select")]
        selections: Vec<String>,

        #[clap(long, value_enum, default_value_t = MatchupStyle::default())]
        style: MatchupStyle,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "cfb-fantasy", about = "College football fantasy stats CLI")]
pub struct Cli {
    /// Debug-level logging (overridden by `RUST_LOG`).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
