//! Data models for the storage layer

use crate::cli::types::{EspnId, InjuryStatus, PlayerId, Position, TeamId};
use serde::Serialize;
use std::ops::AddAssign;

/// Team reference data from the teams table
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub team_id: TeamId,
    pub team_name: String,
    pub conference: String,
    pub roster_url: String,
}

/// One roster entry from the players table.
///
/// `player_name` and `espn_id` are only used to resolve box-score references;
/// everything downstream keys on `player_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub player_id: PlayerId,
    pub player_name: String,
    pub team_id: TeamId,
    pub position: Position,
    /// Depth-chart rank within the position group, 1 = starter
    pub depth: u32,
    pub roster_url: String,
    pub injury_status: InjuryStatus,
    pub espn_id: Option<EspnId>,
}

/// Aggregated usage ("snaps") for one player on one team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UsageRecord {
    pub player_id: PlayerId,
    pub team_id: TeamId,
    pub snaps: u32,
}

/// Raw box-score performance used for fantasy scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PerformanceStats {
    pub rushing_yards: i32,
    pub receiving_yards: i32,
    pub passing_yards: i32,
    pub touchdowns: u32,
    pub interceptions: u32,
}

/// Field-wise saturating sum.
impl AddAssign for PerformanceStats {
    fn add_assign(&mut self, other: Self) {
        self.rushing_yards = self.rushing_yards.saturating_add(other.rushing_yards);
        self.receiving_yards = self.receiving_yards.saturating_add(other.receiving_yards);
        self.passing_yards = self.passing_yards.saturating_add(other.passing_yards);
        self.touchdowns = self.touchdowns.saturating_add(other.touchdowns);
        self.interceptions = self.interceptions.saturating_add(other.interceptions);
    }
}

/// One labeled lineup slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotAssignment {
    pub slot_label: String,
    pub player_id: PlayerId,
}

/// Final scoreboard row handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreboardRow {
    #[serde(rename = "Slot")]
    pub slot_label: String,
    #[serde(skip)]
    pub player_id: PlayerId,
    #[serde(rename = "Player")]
    pub player_name: String,
    #[serde(rename = "Fantasy Points")]
    pub fantasy_points: f64,
    #[serde(rename = "Roster URL")]
    pub roster_url: String,
}
