//! Batch ingestion: payloads in, aggregated usage and performance out.
//!
//! Failures never cross a game boundary. A game that failed to fetch or
//! parse is reported as an [`IngestWarning`] and skipped; unparsable stat
//! strings and unresolved players are dropped silently.

use std::collections::HashMap;
use std::fmt;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::espn::{
    boxscore::{parse_html_boxscore, parse_summary_boxscore, ParsedBoxScore},
    http::GamePayload,
    types::PayloadKind,
};
use crate::ingest::{resolver::Resolver, usage::extract_usage, usage::UsageTable};
use crate::storage::PerformanceStats;
use crate::{GameId, PlayerId};

/// Per-game problems surfaced to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestWarning {
    /// Network error, timeout or non-success status
    FetchFailed { game_id: GameId, reason: String },
    /// The payload was not a document of the expected shape
    InvalidPayload { game_id: GameId, reason: String },
    /// The payload parsed but held no recognized sections
    NoRecognizedSections { game_id: GameId },
}

impl IngestWarning {
    pub fn game_id(&self) -> GameId {
        match self {
            IngestWarning::FetchFailed { game_id, .. }
            | IngestWarning::InvalidPayload { game_id, .. }
            | IngestWarning::NoRecognizedSections { game_id } => *game_id,
        }
    }
}

impl fmt::Display for IngestWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestWarning::FetchFailed { game_id, reason } => {
                write!(f, "Failed to fetch game {}: {}", game_id, reason)
            }
            IngestWarning::InvalidPayload { game_id, reason } => {
                write!(f, "Could not parse game {}: {}", game_id, reason)
            }
            IngestWarning::NoRecognizedSections { game_id } => {
                write!(f, "No stat tables found for game {}", game_id)
            }
        }
    }
}

/// Everything one ingestion run produced
#[derive(Debug, Clone, Default)]
pub struct IngestOutcome {
    pub usage: UsageTable,
    pub performance: HashMap<PlayerId, PerformanceStats>,
    pub warnings: Vec<IngestWarning>,
    /// Observations read from all payloads
    pub observations: usize,
    /// Observations that survived usage extraction and resolution
    pub kept: usize,
}

impl IngestOutcome {
    pub fn fetch_failures(&self) -> usize {
        self.warnings
            .iter()
            .filter(|w| matches!(w, IngestWarning::FetchFailed { .. }))
            .count()
    }
}

fn parse_payload(payload: &GamePayload) -> Result<ParsedBoxScore, IngestWarning> {
    let body = payload
        .body
        .as_ref()
        .map_err(|reason| IngestWarning::FetchFailed {
            game_id: payload.game_id,
            reason: reason.clone(),
        })?;

    let parsed = match payload.kind {
        PayloadKind::Html => parse_html_boxscore(body),
        PayloadKind::Summary => {
            parse_summary_boxscore(body).map_err(|e| IngestWarning::InvalidPayload {
                game_id: payload.game_id,
                reason: e.to_string(),
            })?
        }
    };

    if parsed.recognized_sections == 0 {
        return Err(IngestWarning::NoRecognizedSections {
            game_id: payload.game_id,
        });
    }
    Ok(parsed)
}

/// Parse every payload, resolve references and aggregate.
///
/// Games are parsed on the rayon pool; results are merged in input order,
/// and since aggregation is a plain sum the outcome is the same either way.
pub fn ingest_games(resolver: &Resolver<'_>, payloads: &[GamePayload]) -> IngestOutcome {
    let parsed: Vec<Result<ParsedBoxScore, IngestWarning>> =
        payloads.par_iter().map(parse_payload).collect();

    let mut outcome = IngestOutcome::default();

    for (payload, result) in payloads.iter().zip(parsed) {
        let game = match result {
            Ok(game) => game,
            Err(warning) => {
                warn!("⚠ {}", warning);
                outcome.warnings.push(warning);
                continue;
            }
        };

        outcome.observations += game.observations.len();
        for obs in &game.observations {
            let Some(snaps) = extract_usage(&obs.stat_category, &obs.raw_value) else {
                debug!(
                    "Game {}: dropped {} value '{}' for {}",
                    payload.game_id, obs.stat_category, obs.raw_value, obs.provider_ref
                );
                continue;
            };
            let Some(player) = resolver.resolve(&obs.provider_ref) else {
                debug!(
                    "Game {}: no roster match for {}",
                    payload.game_id, obs.provider_ref
                );
                continue;
            };
            outcome.usage.add(player, snaps);
            outcome.kept += 1;
        }

        for line in &game.performance {
            if let Some(player) = resolver.resolve(&line.provider_ref) {
                *outcome.performance.entry(player.player_id).or_default() += line.stats;
            }
        }
    }

    info!(
        "Ingested {} games: {} observations, {} kept, {} warnings",
        payloads.len(),
        outcome.observations,
        outcome.kept,
        outcome.warnings.len()
    );
    outcome
}
