//! Common pipeline steps shared across commands.
//!
//! The functions here take already-fetched payloads so the whole
//! resolve, aggregate, slot and score path runs without a network.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use tracing::debug;

use crate::{
    core::{build_client, cache_root},
    espn::{
        compute::score_players,
        http::{CachedSource, EspnClient, GamePayload},
    },
    ingest::{ingest_games, IngestOutcome, IngestWarning, Resolver},
    lineup::{assemble_scoreboard, assign_slots},
    storage::{PerformanceStats, RosterStore, ScoreboardRow, UsageRecord},
    MatcherKind, PlayerId, Result,
};

/// Result of one scoreboard run
#[derive(Debug, Clone)]
pub struct ScoreboardRun {
    pub rows: Vec<ScoreboardRow>,
    pub usage: Vec<UsageRecord>,
    pub warnings: Vec<IngestWarning>,
}

/// Network source with the payload cache in front of it.
pub fn make_source(
    timeout: Duration,
    refresh: bool,
    cache_dir: Option<PathBuf>,
) -> Result<CachedSource<EspnClient>> {
    let client = EspnClient::new(build_client(timeout)?);
    Ok(CachedSource::new(
        client,
        cache_dir.unwrap_or_else(cache_root),
        refresh,
    ))
}

/// Ingest payloads for the snap-count snapshot.
pub fn collect_usage(
    roster: &RosterStore,
    payloads: &[GamePayload],
    matcher: MatcherKind,
) -> IngestOutcome {
    let resolver = Resolver::new(roster, matcher);
    debug!(
        "Resolving {} payload(s) with the {} name matcher",
        payloads.len(),
        resolver.name_strategy()
    );
    ingest_games(&resolver, payloads)
}

/// Ingest, slot and score.
///
/// Performance stats come from `stats_table` when given; otherwise from
/// whatever keyed stat blocks the payloads carried.
pub fn build_scoreboard(
    roster: &RosterStore,
    payloads: &[GamePayload],
    matcher: MatcherKind,
    stats_table: Option<&HashMap<PlayerId, PerformanceStats>>,
) -> ScoreboardRun {
    let outcome = collect_usage(roster, payloads, matcher);

    let slots = assign_slots(roster, &outcome.usage);
    let points = match stats_table {
        Some(table) => score_players(table),
        None => score_players(&outcome.performance),
    };
    let rows = assemble_scoreboard(roster, &slots, &points);

    ScoreboardRun {
        rows,
        usage: outcome.usage.records(),
        warnings: outcome.warnings,
    }
}
