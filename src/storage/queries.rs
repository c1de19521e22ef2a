//! Roster store: read-only lookups over teams and players

use std::collections::HashMap;

use super::models::{Player, Team};
use crate::{EspnId, PlayerId, TeamId};

/// Canonical team and player tables for one run.
///
/// Built once and never mutated, so it can be shared across worker threads
/// without locking. Players keep the order they were stored in; every
/// "first match" rule downstream depends on that order.
#[derive(Debug, Clone, Default)]
pub struct RosterStore {
    teams: Vec<Team>,
    players: Vec<Player>,
    team_index: HashMap<TeamId, usize>,
    player_index: HashMap<PlayerId, usize>,
    espn_index: HashMap<EspnId, usize>,
}

impl RosterStore {
    pub fn new(teams: Vec<Team>, players: Vec<Player>) -> Self {
        let mut team_index = HashMap::with_capacity(teams.len());
        for (idx, team) in teams.iter().enumerate() {
            team_index.entry(team.team_id).or_insert(idx);
        }

        let mut player_index = HashMap::with_capacity(players.len());
        let mut espn_index = HashMap::new();
        for (idx, player) in players.iter().enumerate() {
            player_index.entry(player.player_id).or_insert(idx);
            if let Some(espn_id) = player.espn_id {
                espn_index.entry(espn_id).or_insert(idx);
            }
        }

        Self {
            teams,
            players,
            team_index,
            player_index,
            espn_index,
        }
    }

    /// All roster players in stored order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn team(&self, team_id: TeamId) -> Option<&Team> {
        self.team_index.get(&team_id).map(|&idx| &self.teams[idx])
    }

    /// Display name used in slot labels; falls back to the numeric id for
    /// roster teams missing from the teams table.
    pub fn team_name(&self, team_id: TeamId) -> String {
        self.team(team_id)
            .map(|t| t.team_name.clone())
            .unwrap_or_else(|| team_id.to_string())
    }

    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.player_index
            .get(&player_id)
            .map(|&idx| &self.players[idx])
    }

    /// Exact lookup on the provider-id column (first roster row wins).
    pub fn by_espn_id(&self, espn_id: EspnId) -> Option<&Player> {
        self.espn_index.get(&espn_id).map(|&idx| &self.players[idx])
    }

    /// Distinct team ids in order of first appearance on the roster.
    pub fn roster_team_ids(&self) -> Vec<TeamId> {
        let mut seen = Vec::new();
        for player in &self.players {
            if !seen.contains(&player.team_id) {
                seen.push(player.team_id);
            }
        }
        seen
    }
}
