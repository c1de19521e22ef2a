//! Snap-count snapshot from rendered game pages.
//!
//! Scrapes each game's box-score tables, resolves players by display name
//! and writes `player_id, team_id, snaps` for everyone who had usage.

use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{info, warn};

use crate::{
    espn::{
        http::{fetch_games, BoxScoreSource},
        types::PayloadKind,
    },
    storage::{load_roster, write_usage},
    GameId, MatcherKind, Result,
};

use super::{
    common::{collect_usage, make_source},
    resolve_games,
};

/// Options for the snapcounts command
#[derive(Debug, Clone)]
pub struct SnapcountsParams {
    pub players_path: PathBuf,
    pub teams_path: PathBuf,
    pub output_path: PathBuf,
    pub games: Vec<GameId>,
    pub matcher: MatcherKind,
    pub timeout: Duration,
    pub refresh: bool,
    pub cache_dir: Option<PathBuf>,
}

/// Summary of a snapcounts run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapcountsReport {
    pub records: usize,
    pub skipped_games: usize,
    pub written: bool,
}

/// Handle the snapcounts command against ESPN.
pub async fn handle_snapcounts(params: SnapcountsParams) -> Result<SnapcountsReport> {
    let source = make_source(params.timeout, params.refresh, params.cache_dir.clone())?;
    run_snapcounts(&source, &params).await
}

/// Run the snapcounts pipeline against any box-score source.
///
/// The roster is loaded (and its schema checked) before anything is fetched.
pub async fn run_snapcounts<S: BoxScoreSource>(
    source: &S,
    params: &SnapcountsParams,
) -> Result<SnapcountsReport> {
    let roster = load_roster(&params.players_path, &params.teams_path)?;
    let games = resolve_games(params.games.clone())?;

    info!("Fetching {} game page(s)", games.len());
    let payloads = fetch_games(source, &games, PayloadKind::Html).await;
    let outcome = collect_usage(&roster, &payloads, params.matcher);

    let records = outcome.usage.records();
    let report = SnapcountsReport {
        records: records.len(),
        skipped_games: outcome.warnings.len(),
        written: !records.is_empty(),
    };

    if records.is_empty() {
        warn!("No snap count data collected.");
        return Ok(report);
    }

    write_usage(File::create(&params.output_path)?, &records)?;
    println!(
        "Saved {} snap count rows to {}",
        records.len(),
        params.output_path.display()
    ); // tarpaulin::skip

    Ok(report)
}
