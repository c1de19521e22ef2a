//! Head-to-head matchup rendered from a written scoreboard table.

use std::collections::HashMap;
use std::fs::File;
use std::path::PathBuf;

use tracing::warn;

use crate::{
    lineup::{
        build_matchup, matchup::parse_slot_label, render_matchup, LineupConfig, SelectionState,
        Side,
    },
    storage::{read_scoreboard, ScoreboardRow},
    MatchupStyle, Result,
};

/// Options for the matchup command
#[derive(Debug, Clone)]
pub struct MatchupParams {
    pub scoreboard_path: PathBuf,
    pub style: MatchupStyle,
    /// Slot labels to start, e.g. `"Alabama RB3"`
    pub selections: Vec<String>,
}

/// Handle the matchup command.
pub fn handle_matchup(params: MatchupParams) -> Result<String> {
    let label = params.scoreboard_path.display().to_string();
    let rows = read_scoreboard(File::open(&params.scoreboard_path)?, &label)?;
    let rendered = render_from_rows(&rows, &params.selections, params.style)?;
    print!("{}", rendered); // tarpaulin::skip
    Ok(rendered)
}

/// Build and render the matchup for already-loaded scoreboard rows.
pub fn render_from_rows(
    rows: &[ScoreboardRow],
    selections: &[String],
    style: MatchupStyle,
) -> Result<String> {
    let selection = selection_from_labels(rows, selections);
    let matchup = build_matchup(rows, &LineupConfig::default(), &selection)?;
    Ok(render_matchup(&matchup, style))
}

/// Turn chosen slot labels into a [`SelectionState`].
///
/// A label goes to the side its team occupies (first team on the left) and
/// fills that position's spots in the order given.
pub fn selection_from_labels(rows: &[ScoreboardRow], labels: &[String]) -> SelectionState {
    let mut teams: Vec<String> = Vec::new();
    for row in rows {
        if let Some(parsed) = parse_slot_label(&row.slot_label) {
            if !teams.contains(&parsed.team) {
                teams.push(parsed.team);
            }
        }
    }

    let mut selection = SelectionState::new();
    let mut next_spot: HashMap<(Side, String), usize> = HashMap::new();
    for label in labels {
        let Some(parsed) = parse_slot_label(label) else {
            warn!("Ignoring malformed slot selection '{}'", label);
            continue;
        };
        let side = match teams.iter().position(|t| *t == parsed.team) {
            Some(0) => Side::Left,
            Some(1) => Side::Right,
            _ => {
                warn!("Slot '{}' is not on either matchup team", label);
                continue;
            }
        };
        let spot = next_spot.entry((side, parsed.position.clone())).or_insert(0);
        selection.select(side, &parsed.position, *spot, label.trim());
        *spot += 1;
    }
    selection
}
