//! Tabular schema contracts and required-column validation
//!
//! A missing required column is the one batch-fatal input error: it is
//! reported before any rows are read, naming the file and the column.

use std::collections::HashMap;
use std::str::FromStr;

use csv::StringRecord;

use crate::error::{FantasyError, Result};

/// Columns required in the players (roster) table.
pub const ROSTER_COLUMNS: [&str; 8] = [
    "player_id",
    "player_name",
    "team_id",
    "position",
    "depth",
    "roster_url",
    "injury_status",
    "espn_id",
];

/// Columns required in the teams table.
pub const TEAM_COLUMNS: [&str; 4] = ["team_id", "team_name", "conference", "roster_url"];

/// Columns required in the optional per-player performance stats table.
pub const STATS_COLUMNS: [&str; 6] = [
    "player_id",
    "rushing_yards",
    "receiving_yards",
    "passing_yards",
    "tds",
    "int",
];

/// Columns of the usage snapshot written by the snap-count command.
pub const USAGE_COLUMNS: [&str; 3] = ["player_id", "team_id", "snaps"];

/// Columns of the scoreboard table handed to the presentation layer.
pub const SCOREBOARD_COLUMNS: [&str; 4] = ["Slot", "Player", "Fantasy Points", "Roster URL"];

/// Header positions of required columns for one input file
#[derive(Debug, Clone)]
pub struct ColumnIndex {
    file: String,
    positions: HashMap<&'static str, usize>,
}

impl ColumnIndex {
    /// Locate every required column in `headers` (whitespace-trimmed).
    ///
    /// Extra columns are ignored. Fails on the first required column that
    /// is absent.
    pub fn new(file: &str, headers: &StringRecord, required: &[&'static str]) -> Result<Self> {
        let mut positions = HashMap::with_capacity(required.len());
        for &column in required {
            let idx = headers
                .iter()
                .position(|h| h.trim() == column)
                .ok_or_else(|| FantasyError::MissingColumn {
                    file: file.to_string(),
                    column: column.to_string(),
                })?;
            positions.insert(column, idx);
        }
        Ok(Self {
            file: file.to_string(),
            positions,
        })
    }

    /// Trimmed cell text for `column`, empty when the record is short.
    pub fn get<'r>(&self, record: &'r StringRecord, column: &str) -> &'r str {
        self.positions
            .get(column)
            .and_then(|&idx| record.get(idx))
            .map(str::trim)
            .unwrap_or("")
    }

    /// Parse the cell for `column`, reporting the file and column on failure.
    pub fn parse<T: FromStr>(&self, record: &StringRecord, column: &str) -> Result<T> {
        let raw = self.get(record, column);
        raw.parse().map_err(|_| self.invalid(column, raw))
    }

    /// Parse the cell for `column`, treating an empty cell as `None`.
    pub fn parse_optional<T: FromStr>(
        &self,
        record: &StringRecord,
        column: &str,
    ) -> Result<Option<T>> {
        let raw = self.get(record, column);
        if raw.is_empty() || raw.eq_ignore_ascii_case("nan") {
            return Ok(None);
        }
        raw.parse().map(Some).map_err(|_| self.invalid(column, raw))
    }

    fn invalid(&self, column: &str, raw: &str) -> FantasyError {
        FantasyError::InvalidField {
            file: self.file.clone(),
            column: column.to_string(),
            value: raw.to_string(),
        }
    }
}
