//! Roster position types and utilities.

use crate::error::FantasyError;
use std::fmt;
use std::str::FromStr;

/// Roster positions as they appear in the players table.
///
/// The fantasy-relevant positions have their own variants; anything else a
/// roster lists (OL, LB, ATH, ...) is kept verbatim in `Other` so it still
/// gets slotted.
///
/// # Examples
///
/// ```rust
/// use cfb_fantasy::Position;
///
/// let rb: Position = "rb".parse().unwrap();
/// assert_eq!(rb, Position::RB);
/// assert_eq!(rb.to_string(), "RB");
/// assert_eq!("D/ST".parse::<Position>().unwrap(), Position::DEF);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DEF,
    Other(String),
}

impl Position {
    /// Positions that make up a standard fantasy lineup, in display order.
    pub fn lineup_positions() -> [Position; 6] {
        [
            Position::QB,
            Position::RB,
            Position::WR,
            Position::TE,
            Position::K,
            Position::DEF,
        ]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DEF => "DEF",
            Position::Other(name) => name.as_str(),
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = FantasyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_uppercase().as_str() {
            "" => Err(FantasyError::InvalidPosition {
                position: s.to_string(),
            }),
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "K" | "PK" => Ok(Position::K),
            "DEF" | "D/ST" | "DST" => Ok(Position::DEF),
            // Digits would make "{position}{rank}" slot labels ambiguous
            other if other.chars().any(|c| c.is_ascii_digit() || c.is_whitespace()) => {
                Err(FantasyError::InvalidPosition {
                    position: s.to_string(),
                })
            }
            other => Ok(Position::Other(other.to_string())),
        }
    }
}
