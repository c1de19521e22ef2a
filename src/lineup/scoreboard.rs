//! Scoreboard assembly: slots joined with roster details and fantasy points

use std::collections::HashMap;

use crate::storage::{RosterStore, ScoreboardRow, SlotAssignment};
use crate::PlayerId;

/// One row per slot, in slot order. Players without a score get 0.0.
pub fn assemble_scoreboard(
    roster: &RosterStore,
    slots: &[SlotAssignment],
    points: &HashMap<PlayerId, f64>,
) -> Vec<ScoreboardRow> {
    slots
        .iter()
        .filter_map(|slot| {
            let player = roster.player(slot.player_id)?;
            Some(ScoreboardRow {
                slot_label: slot.slot_label.clone(),
                player_id: player.player_id,
                player_name: player.player_name.clone(),
                fantasy_points: points.get(&player.player_id).copied().unwrap_or(0.0),
                roster_url: player.roster_url.clone(),
            })
        })
        .collect()
}

/// Console line for one scoreboard row.
pub fn format_row(row: &ScoreboardRow) -> String {
    format!(
        "{} ({}): {} pts | Roster: {}",
        row.slot_label,
        row.player_name,
        format_points(row.fantasy_points),
        row.roster_url
    )
}

/// Points with at least one decimal, e.g. `25.3`, `0.0`.
pub fn format_points(points: f64) -> String {
    format!("{:.1}", points)
}
