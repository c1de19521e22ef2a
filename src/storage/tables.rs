//! CSV readers and writers for the flat input and output tables

use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Writer};
use tracing::debug;

use super::{
    models::{PerformanceStats, Player, ScoreboardRow, Team, UsageRecord},
    queries::RosterStore,
    schema::{
        ColumnIndex, ROSTER_COLUMNS, SCOREBOARD_COLUMNS, STATS_COLUMNS, TEAM_COLUMNS,
        USAGE_COLUMNS,
    },
};
use crate::{error::Result, EspnId, PlayerId};

fn reader<R: Read>(source: R) -> csv::Reader<R> {
    ReaderBuilder::new().flexible(true).from_reader(source)
}

/// Read header + rows, validating required columns before touching any row.
fn read_table<R: Read>(
    source: R,
    file: &str,
    required: &[&'static str],
) -> Result<(ColumnIndex, Vec<StringRecord>)> {
    let mut rdr = reader(source);
    let headers = rdr.headers()?.clone();
    let index = ColumnIndex::new(file, &headers, required)?;

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        rows.push(record);
    }
    Ok((index, rows))
}

/// Parse the players table.
pub fn read_players<R: Read>(source: R, file: &str) -> Result<Vec<Player>> {
    let (index, rows) = read_table(source, file, &ROSTER_COLUMNS)?;
    players_from_rows(&index, &rows, file)
}

fn players_from_rows(
    index: &ColumnIndex,
    rows: &[StringRecord],
    file: &str,
) -> Result<Vec<Player>> {
    let mut players = Vec::with_capacity(rows.len());
    for record in rows {
        players.push(Player {
            player_id: index.parse(record, "player_id")?,
            player_name: index.get(record, "player_name").to_string(),
            team_id: index.parse(record, "team_id")?,
            position: index.parse(record, "position")?,
            depth: index.parse(record, "depth")?,
            roster_url: index.get(record, "roster_url").to_string(),
            injury_status: index.parse(record, "injury_status")?,
            espn_id: index.parse_optional::<EspnId>(record, "espn_id")?,
        });
    }
    debug!("Read {} players from {}", players.len(), file);
    Ok(players)
}

/// Parse the teams table.
pub fn read_teams<R: Read>(source: R, file: &str) -> Result<Vec<Team>> {
    let (index, rows) = read_table(source, file, &TEAM_COLUMNS)?;
    teams_from_rows(&index, &rows, file)
}

fn teams_from_rows(
    index: &ColumnIndex,
    rows: &[StringRecord],
    file: &str,
) -> Result<Vec<Team>> {
    let mut teams = Vec::with_capacity(rows.len());
    for record in rows {
        teams.push(Team {
            team_id: index.parse(record, "team_id")?,
            team_name: index.get(record, "team_name").to_string(),
            conference: index.get(record, "conference").to_string(),
            roster_url: index.get(record, "roster_url").to_string(),
        });
    }
    debug!("Read {} teams from {}", teams.len(), file);
    Ok(teams)
}

/// Parse the optional performance stats table. Repeated player rows are summed.
pub fn read_performance_stats<R: Read>(
    source: R,
    file: &str,
) -> Result<HashMap<PlayerId, PerformanceStats>> {
    let (index, rows) = read_table(source, file, &STATS_COLUMNS)?;
    let mut stats: HashMap<PlayerId, PerformanceStats> = HashMap::new();
    for record in &rows {
        let line = PerformanceStats {
            rushing_yards: index.parse(record, "rushing_yards")?,
            receiving_yards: index.parse(record, "receiving_yards")?,
            passing_yards: index.parse(record, "passing_yards")?,
            touchdowns: index.parse(record, "tds")?,
            interceptions: index.parse(record, "int")?,
        };
        *stats.entry(index.parse(record, "player_id")?).or_default() += line;
    }
    Ok(stats)
}

/// Load teams and players from disk into a [`RosterStore`].
///
/// Both headers are validated before either table's rows are interpreted.
pub fn load_roster(players_path: &Path, teams_path: &Path) -> Result<RosterStore> {
    let players_label = players_path.display().to_string();
    let teams_label = teams_path.display().to_string();

    let (player_index, player_rows) =
        read_table(File::open(players_path)?, &players_label, &ROSTER_COLUMNS)?;
    let (team_index, team_rows) =
        read_table(File::open(teams_path)?, &teams_label, &TEAM_COLUMNS)?;

    let players = players_from_rows(&player_index, &player_rows, &players_label)?;
    let teams = teams_from_rows(&team_index, &team_rows, &teams_label)?;
    Ok(RosterStore::new(teams, players))
}

/// Read a previously written scoreboard table (presentation side).
pub fn read_scoreboard<R: Read>(source: R, file: &str) -> Result<Vec<ScoreboardRow>> {
    let (index, rows) = read_table(source, file, &SCOREBOARD_COLUMNS)?;
    let mut out = Vec::with_capacity(rows.len());
    for record in &rows {
        // Non-numeric points are treated as zero, like a coerced blank cell
        let fantasy_points = index
            .get(record, "Fantasy Points")
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .unwrap_or(0.0);
        out.push(ScoreboardRow {
            slot_label: index.get(record, "Slot").to_string(),
            player_id: PlayerId::default(),
            player_name: index.get(record, "Player").to_string(),
            fantasy_points,
            roster_url: index.get(record, "Roster URL").to_string(),
        });
    }
    Ok(out)
}

/// Write the usage snapshot (`player_id, team_id, snaps`).
pub fn write_usage<W: Write>(sink: W, records: &[UsageRecord]) -> Result<()> {
    let mut wtr = Writer::from_writer(sink);
    wtr.write_record(USAGE_COLUMNS)?;
    for r in records {
        wtr.write_record([
            r.player_id.to_string(),
            r.team_id.to_string(),
            r.snaps.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the scoreboard table (`Slot, Player, Fantasy Points, Roster URL`).
pub fn write_scoreboard<W: Write>(sink: W, rows: &[ScoreboardRow]) -> Result<()> {
    let mut wtr = Writer::from_writer(sink);
    for row in rows {
        wtr.serialize(row)?;
    }
    if rows.is_empty() {
        wtr.write_record(SCOREBOARD_COLUMNS)?;
    }
    wtr.flush()?;
    Ok(())
}
