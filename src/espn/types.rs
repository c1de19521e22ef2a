use crate::cli::types::EspnId;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;


/// Which box-score representation a game is fetched and parsed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    /// Rendered game page; stat tables located by caption
    Html,
    /// Summary API JSON; statistic blocks keyed by provider athlete id
    Summary,
}

impl PayloadKind {
    pub fn file_extension(&self) -> &'static str {
        match self {
            PayloadKind::Html => "html",
            PayloadKind::Summary => "json",
        }
    }
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PayloadKind::Html => "html",
            PayloadKind::Summary => "summary",
        };
        write!(f, "{}", s)
    }
}

/// Stat categories found in box scores. Only passing and rushing carry usage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StatCategory {
    Passing,
    Rushing,
    Receiving,
    Other(String),
}

impl StatCategory {
    /// Category from a structured block name (`"passing"`, `"rushing"`, ...).
    pub fn from_block_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "passing" => StatCategory::Passing,
            "rushing" => StatCategory::Rushing,
            "receiving" => StatCategory::Receiving,
            other => StatCategory::Other(other.to_string()),
        }
    }

    /// Category from a table caption. Only passing and rushing tables are
    /// recognized; passing wins when a caption mentions both.
    pub fn from_caption(caption: &str) -> Option<Self> {
        let caption = caption.to_lowercase();
        if caption.contains("passing") {
            Some(StatCategory::Passing)
        } else if caption.contains("rushing") {
            Some(StatCategory::Rushing)
        } else {
            None
        }
    }
}

impl fmt::Display for StatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StatCategory::Passing => "passing",
            StatCategory::Rushing => "rushing",
            StatCategory::Receiving => "receiving",
            StatCategory::Other(name) => name.as_str(),
        };
        write!(f, "{}", s)
    }
}

/// How a box score refers to a player
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProviderRef {
    /// Provider numeric id (structured payloads)
    Id(EspnId),
    /// Display name as printed in a stat table
    Name(String),
}

impl fmt::Display for ProviderRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderRef::Id(id) => write!(f, "#{}", id),
            ProviderRef::Name(name) => write!(f, "{}", name),
        }
    }
}

/// One stat line for one player, as read from a single game's box score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawStatObservation {
    pub provider_ref: ProviderRef,
    pub stat_category: StatCategory,
    pub raw_value: String,
}

/// Root of the summary endpoint document.
///
/// Statistic blocks show up either at the top level or nested per team
/// under `boxscore.players`; both are read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryPayload {
    #[serde(default)]
    pub statistics: Vec<StatBlock>,
    #[serde(default)]
    pub boxscore: Option<BoxscoreSection>,
}

impl SummaryPayload {
    /// Every statistic block in document order: top-level first, then per team.
    pub fn blocks(&self) -> impl Iterator<Item = &StatBlock> {
        self.statistics.iter().chain(
            self.boxscore
                .iter()
                .flat_map(|b| b.players.iter())
                .flat_map(|team| team.statistics.iter()),
        )
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoxscoreSection {
    #[serde(default)]
    pub players: Vec<TeamBoxscore>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamBoxscore {
    #[serde(default)]
    pub statistics: Vec<StatBlock>,
}

/// One category of stats (`"passing"`, `"rushing"`, ...) and its athletes
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatBlock {
    #[serde(default)]
    pub name: Option<String>,
    /// Machine names for each column of `AthleteLine::stats`, when present
    #[serde(default)]
    pub keys: Vec<String>,
    #[serde(default)]
    pub athletes: Vec<AthleteLine>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AthleteLine {
    #[serde(default)]
    pub athlete: Option<AthleteRef>,
    #[serde(default, deserialize_with = "de_stat_cells")]
    pub stats: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AthleteRef {
    #[serde(default, deserialize_with = "de_lenient_espn_id")]
    pub id: Option<EspnId>,
}

/// Athlete ids arrive as JSON strings (`"4432577"`) or numbers; anything
/// else is treated as absent rather than failing the whole document.
fn de_lenient_espn_id<'de, D>(deserializer: D) -> Result<Option<EspnId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(match raw {
        Value::Number(n) => n.as_u64().map(EspnId::new),
        Value::String(s) => s.parse().ok(),
        _ => None,
    })
}

/// Stat cells are normally strings; numbers are stringified, other values
/// become empty cells so column positions stay aligned with `keys`.
fn de_stat_cells<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .map(|cell| match cell {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            _ => String::new(),
        })
        .collect())
}
