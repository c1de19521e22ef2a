//! Slot assignment: every roster player gets a `"{team} {position}{rank}"` label.

use std::collections::HashSet;

use tracing::warn;

use crate::ingest::UsageTable;
use crate::storage::{Player, RosterStore, SlotAssignment};
use crate::Position;

/// Slot label for one ranked player, e.g. `"Alabama RB1"`.
pub fn slot_label(team_name: &str, position: &Position, rank: usize) -> String {
    format!("{} {}{}", team_name, position, rank)
}

/// Rank every roster player within its `(team, position)` group.
///
/// Teams are visited in order of first appearance on the roster, positions
/// in order of first appearance within the team. Each group is sorted
/// ascending by `(depth, usage)` with usage defaulting to 0; ties keep
/// roster order. Note usage is ascending, so among equal depths the
/// lower-usage player takes the lower rank.
///
/// Labels must be unique across the scoreboard. If two teams share a name
/// the later duplicate label is skipped and logged.
pub fn assign_slots(roster: &RosterStore, usage: &UsageTable) -> Vec<SlotAssignment> {
    let mut assignments = Vec::with_capacity(roster.players().len());
    let mut seen_labels = HashSet::new();

    for team_id in roster.roster_team_ids() {
        let team_name = roster.team_name(team_id);
        let team_players: Vec<&Player> = roster
            .players()
            .iter()
            .filter(|p| p.team_id == team_id)
            .collect();

        let mut positions: Vec<&Position> = Vec::new();
        for p in &team_players {
            if !positions.contains(&&p.position) {
                positions.push(&p.position);
            }
        }

        for position in positions {
            let mut group: Vec<(&Player, u32)> = team_players
                .iter()
                .filter(|p| &p.position == position)
                .map(|p| (*p, usage.usage_for(p.player_id, p.team_id)))
                .collect();
            group.sort_by_key(|(p, snaps)| (p.depth, *snaps));

            for (rank, (player, _)) in group.iter().enumerate() {
                let label = slot_label(&team_name, position, rank + 1);
                if !seen_labels.insert(label.clone()) {
                    warn!(
                        "Duplicate slot label '{}' for player {}; skipping",
                        label, player.player_id
                    );
                    continue;
                }
                assignments.push(SlotAssignment {
                    slot_label: label,
                    player_id: player.player_id,
                });
            }
        }
    }

    assignments
}
