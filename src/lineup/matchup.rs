//! Head-to-head matchup view over a scoreboard table.
//!
//! This is the presentation consumer: it only reads [`ScoreboardRow`]s.
//! Lineup choices live in a [`SelectionState`] owned by the caller and
//! passed in; nothing here keeps state between renders.

use std::collections::HashMap;

use tracing::warn;

use crate::error::{FantasyError, Result};
use crate::espn::compute::round_to_tenth;
use crate::lineup::scoreboard::format_points;
use crate::storage::ScoreboardRow;
use crate::{MatchupStyle, Position};

/// A slot label split into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotLabel {
    pub team: String,
    pub position: String,
    pub rank: u32,
}

/// Split `"Florida State QB1"` into team, position and rank.
///
/// The team is everything before the last space, so multi-word team names
/// survive. Returns `None` when the last token is not `<letters><digits>`.
pub fn parse_slot_label(label: &str) -> Option<SlotLabel> {
    let (team, tail) = label.trim().rsplit_once(' ')?;
    let digits_at = tail.find(|c: char| c.is_ascii_digit())?;
    let (position, rank) = tail.split_at(digits_at);
    if position.is_empty() || team.trim().is_empty() {
        return None;
    }
    Some(SlotLabel {
        team: team.trim().to_string(),
        position: position.to_string(),
        rank: rank.parse().ok()?,
    })
}

/// Which side of the matchup a team is shown on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Number of starters per position, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineupConfig {
    pub spots: Vec<(String, usize)>,
}

impl Default for LineupConfig {
    fn default() -> Self {
        let starters = [1, 2, 2, 1, 1, 1];
        Self {
            spots: Position::lineup_positions()
                .iter()
                .zip(starters)
                .map(|(position, count)| (position.to_string(), count))
                .collect(),
        }
    }
}

/// Caller-owned lineup choices: `(side, position, spot index)` to slot label.
///
/// Spots without a choice show the slot whose rank order matches the spot
/// (first RB spot shows the team's first RB slot, and so on).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    choices: HashMap<(Side, String, usize), String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, side: Side, position: &str, index: usize, slot_label: &str) {
        self.choices
            .insert((side, position.to_string(), index), slot_label.to_string());
    }

    pub fn get(&self, side: Side, position: &str, index: usize) -> Option<&str> {
        self.choices
            .get(&(side, position.to_string(), index))
            .map(String::as_str)
    }
}

/// The slot shown in one lineup spot
#[derive(Debug, Clone, PartialEq)]
pub struct ChosenSlot {
    pub slot_label: String,
    pub fantasy_points: f64,
    pub roster_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchupLine {
    pub position: String,
    pub index: usize,
    pub left: Option<ChosenSlot>,
    pub right: Option<ChosenSlot>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Matchup {
    pub left_team: String,
    pub right_team: String,
    pub lines: Vec<MatchupLine>,
    pub left_total: f64,
    pub right_total: f64,
}

struct TeamSlots<'a> {
    by_position: HashMap<String, Vec<&'a ScoreboardRow>>,
}

impl<'a> TeamSlots<'a> {
    fn options(&self, position: &str) -> &[&'a ScoreboardRow] {
        self.by_position
            .get(position)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

fn choose(
    team: &TeamSlots<'_>,
    selection: &SelectionState,
    side: Side,
    position: &str,
    index: usize,
) -> Option<ChosenSlot> {
    let options = team.options(position);
    let picked = match selection.get(side, position, index) {
        Some(label) => match options.iter().find(|r| r.slot_label == label) {
            Some(row) => Some(*row),
            None => {
                warn!("Selected slot '{}' is not a {} option; using default", label, position);
                options.get(index).copied()
            }
        },
        None => options.get(index).copied(),
    };
    picked.map(|row| ChosenSlot {
        slot_label: row.slot_label.clone(),
        fantasy_points: row.fantasy_points,
        roster_url: row.roster_url.clone(),
    })
}

/// Build the two-team matchup from scoreboard rows.
///
/// Teams are taken in order of first appearance. More than two teams is
/// logged and only the first two are shown; fewer than two is an error.
/// Rows whose slot label cannot be split are ignored.
pub fn build_matchup(
    rows: &[ScoreboardRow],
    config: &LineupConfig,
    selection: &SelectionState,
) -> Result<Matchup> {
    let mut team_order: Vec<String> = Vec::new();
    let mut teams: HashMap<String, TeamSlots<'_>> = HashMap::new();

    for row in rows {
        let Some(label) = parse_slot_label(&row.slot_label) else {
            continue;
        };
        if !team_order.contains(&label.team) {
            team_order.push(label.team.clone());
        }
        teams
            .entry(label.team)
            .or_insert_with(|| TeamSlots {
                by_position: HashMap::new(),
            })
            .by_position
            .entry(label.position)
            .or_default()
            .push(row);
    }

    if team_order.len() < 2 {
        return Err(FantasyError::NotEnoughTeams {
            found: team_order.len(),
        });
    }
    if team_order.len() > 2 {
        warn!(
            "Expected exactly 2 teams for a single matchup. Found: {}",
            team_order.join(", ")
        );
    }

    let left_team = team_order[0].clone();
    let right_team = team_order[1].clone();
    let left = &teams[&left_team];
    let right = &teams[&right_team];

    let mut lines = Vec::new();
    let mut left_total = 0.0;
    let mut right_total = 0.0;
    for (position, count) in &config.spots {
        for index in 0..*count {
            let l = choose(left, selection, Side::Left, position, index);
            let r = choose(right, selection, Side::Right, position, index);
            left_total += l.as_ref().map_or(0.0, |c| c.fantasy_points);
            right_total += r.as_ref().map_or(0.0, |c| c.fantasy_points);
            lines.push(MatchupLine {
                position: position.clone(),
                index,
                left: l,
                right: r,
            });
        }
    }

    Ok(Matchup {
        left_team,
        right_team,
        lines,
        left_total: round_to_tenth(left_total),
        right_total: round_to_tenth(right_total),
    })
}

fn cell(choice: &Option<ChosenSlot>) -> String {
    match choice {
        Some(c) => format!("{} - {} pts", c.slot_label, format_points(c.fantasy_points)),
        None => "-".to_string(),
    }
}

/// Render the matchup as fixed-width text.
pub fn render_matchup(matchup: &Matchup, style: MatchupStyle) -> String {
    let width = matchup
        .lines
        .iter()
        .map(|l| cell(&l.left).chars().count())
        .chain(std::iter::once(matchup.left_team.chars().count()))
        .max()
        .unwrap_or(0);
    let row = |left: &str, middle: &str, right: &str| {
        format!("{:<width$} | {:^5} | {}\n", left, middle, right)
    };

    let mut out = String::from("College Football Fantasy Matchup (Slot-based)\n");
    out.push_str(&row(&matchup.left_team, "", &matchup.right_team));

    for line in &matchup.lines {
        out.push_str(&row(&cell(&line.left), &line.position, &cell(&line.right)));
        if style == MatchupStyle::Detailed {
            out.push_str(&row(&roster_link(&line.left), "", &roster_link(&line.right)));
        }
    }

    out.push_str(&format!(
        "Team 1 Total: {} pts | Team 2 Total: {} pts\n",
        format_points(matchup.left_total),
        format_points(matchup.right_total)
    ));
    out
}

fn roster_link(choice: &Option<ChosenSlot>) -> String {
    choice
        .as_ref()
        .map(|c| format!("Roster: {}", c.roster_url))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerId;

    fn row(slot: &str, points: f64) -> ScoreboardRow {
        ScoreboardRow {
            slot_label: slot.to_string(),
            player_id: PlayerId::default(),
            player_name: String::new(),
            fantasy_points: points,
            roster_url: format!("https://example.com/{}", slot.replace(' ', "-")),
        }
    }

    fn scoreboard() -> Vec<ScoreboardRow> {
        vec![
            row("Alabama QB1", 25.3),
            row("Alabama RB1", 9.2),
            row("Alabama RB2", 4.1),
            row("Alabama RB3", 12.0),
            row("Florida State QB1", 18.0),
            row("Florida State RB1", 7.5),
        ]
    }

    #[test]
    fn test_default_lineup_config() {
        let config = LineupConfig::default();
        let spots: Vec<(&str, usize)> = config
            .spots
            .iter()
            .map(|(p, n)| (p.as_str(), *n))
            .collect();
        assert_eq!(
            spots,
            vec![("QB", 1), ("RB", 2), ("WR", 2), ("TE", 1), ("K", 1), ("DEF", 1)]
        );
    }

    #[test]
    fn test_parse_slot_label() {
        assert_eq!(
            parse_slot_label("Florida State QB1"),
            Some(SlotLabel {
                team: "Florida State".to_string(),
                position: "QB".to_string(),
                rank: 1,
            })
        );
        assert_eq!(parse_slot_label("Alabama DEF12").unwrap().rank, 12);
        assert_eq!(parse_slot_label("Alabama"), None);
        assert_eq!(parse_slot_label("Alabama QB"), None);
        assert_eq!(parse_slot_label("Alabama 1"), None);
    }

    #[test]
    fn test_default_selection_fills_spots_in_rank_order() {
        let m = build_matchup(&scoreboard(), &LineupConfig::default(), &SelectionState::new())
            .unwrap();
        assert_eq!(m.left_team, "Alabama");
        assert_eq!(m.right_team, "Florida State");
        assert_eq!(m.lines.len(), 8);

        let rb2 = m
            .lines
            .iter()
            .find(|l| l.position == "RB" && l.index == 1)
            .unwrap();
        assert_eq!(rb2.left.as_ref().unwrap().slot_label, "Alabama RB2");
        assert!(rb2.right.is_none());

        // 25.3 + 9.2 + 4.1
        assert_eq!(m.left_total, 38.6);
        assert_eq!(m.right_total, 25.5);
    }

    #[test]
    fn test_explicit_selection_overrides_default() {
        let mut selection = SelectionState::new();
        selection.select(Side::Left, "RB", 1, "Alabama RB3");
        let m = build_matchup(&scoreboard(), &LineupConfig::default(), &selection).unwrap();
        // 25.3 + 9.2 + 12.0
        assert_eq!(m.left_total, 46.5);
    }

    #[test]
    fn test_invalid_selection_falls_back() {
        let mut selection = SelectionState::new();
        selection.select(Side::Right, "QB", 0, "Alabama QB1");
        let m = build_matchup(&scoreboard(), &LineupConfig::default(), &selection).unwrap();
        let qb = &m.lines[0];
        assert_eq!(qb.right.as_ref().unwrap().slot_label, "Florida State QB1");
    }

    #[test]
    fn test_single_team_is_an_error() {
        let rows = vec![row("Alabama QB1", 1.0)];
        let err = build_matchup(&rows, &LineupConfig::default(), &SelectionState::new())
            .unwrap_err();
        assert!(matches!(err, FantasyError::NotEnoughTeams { found: 1 }));
    }

    #[test]
    fn test_extra_teams_use_first_two() {
        let mut rows = scoreboard();
        rows.push(row("Georgia QB1", 30.0));
        let m = build_matchup(&rows, &LineupConfig::default(), &SelectionState::new()).unwrap();
        assert_eq!(m.right_team, "Florida State");
    }

    #[test]
    fn test_render_compact_and_detailed() {
        let m = build_matchup(&scoreboard(), &LineupConfig::default(), &SelectionState::new())
            .unwrap();
        let compact = render_matchup(&m, MatchupStyle::Compact);
        assert!(compact.contains("Alabama QB1 - 25.3 pts"));
        assert!(compact.contains("Florida State QB1 - 18.0 pts"));
        assert!(compact.contains("Team 1 Total: 38.6 pts | Team 2 Total: 25.5 pts"));
        assert!(!compact.contains("Roster:"));

        let detailed = render_matchup(&m, MatchupStyle::Detailed);
        assert!(detailed.contains("Roster: https://example.com/Alabama-QB1"));
        assert!(detailed.lines().count() > compact.lines().count());
    }

    #[test]
    fn test_render_layout() {
        let m = build_matchup(&scoreboard(), &LineupConfig::default(), &SelectionState::new())
            .unwrap();
        let compact = render_matchup(&m, MatchupStyle::Compact);
        let lines: Vec<&str> = compact.lines().collect();
        // header, team names, eight lineup spots, totals
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "College Football Fantasy Matchup (Slot-based)");
        assert!(lines[1].starts_with("Alabama"));
        assert!(lines[1].ends_with("|       | Florida State"));
        assert!(lines[2].contains("|  QB   |"));
        assert!(lines[4].ends_with("| -"));
        assert!(compact.ends_with("Team 2 Total: 25.5 pts\n"));

        let detailed = render_matchup(&m, MatchupStyle::Detailed);
        assert_eq!(detailed.lines().count(), 19);
    }
}
