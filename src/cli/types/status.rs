//! Injury designations carried on roster rows.

use std::fmt;
use std::str::FromStr;

use crate::error::FantasyError;

/// Player injury status from the roster table.
///
/// Unrecognized designations are preserved in `Other` rather than rejected;
/// the status is informational and never affects slotting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum InjuryStatus {
    #[default]
    Active,
    Probable,
    Questionable,
    Doubtful,
    Out,
    DayToDay,
    IR,
    Other(String),
}

impl fmt::Display for InjuryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InjuryStatus::Active => "Active",
            InjuryStatus::Probable => "Probable",
            InjuryStatus::Questionable => "Questionable",
            InjuryStatus::Doubtful => "Doubtful",
            InjuryStatus::Out => "Out",
            InjuryStatus::DayToDay => "Day to Day",
            InjuryStatus::IR => "IR",
            InjuryStatus::Other(raw) => raw.as_str(),
        };
        write!(f, "{}", s)
    }
}

impl FromStr for InjuryStatus {
    type Err = FantasyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let status = match s.trim().to_lowercase().as_str() {
            "" | "active" | "healthy" => InjuryStatus::Active,
            "probable" | "p" => InjuryStatus::Probable,
            "questionable" | "q" => InjuryStatus::Questionable,
            "doubtful" | "d" => InjuryStatus::Doubtful,
            "out" | "o" => InjuryStatus::Out,
            "day to day" | "day-to-day" | "dtd" => InjuryStatus::DayToDay,
            "ir" | "injured reserve" => InjuryStatus::IR,
            _ => InjuryStatus::Other(s.trim().to_string()),
        };
        Ok(status)
    }
}
