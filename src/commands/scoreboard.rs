//! Scoreboard run: structured summaries through to fantasy points per slot.

use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{info, warn};

use crate::{
    espn::{
        http::{fetch_games, BoxScoreSource},
        types::PayloadKind,
    },
    lineup::format_row,
    storage::{load_roster, read_performance_stats, write_scoreboard},
    GameId, MatcherKind, Result,
};

use super::{
    common::{build_scoreboard, make_source, ScoreboardRun},
    resolve_games,
};

/// Options for the scoreboard command
#[derive(Debug, Clone)]
pub struct ScoreboardParams {
    pub players_path: PathBuf,
    pub teams_path: PathBuf,
    /// Optional per-player stats table; overrides stats carried in payloads
    pub stats_path: Option<PathBuf>,
    pub output_path: PathBuf,
    pub games: Vec<GameId>,
    pub matcher: MatcherKind,
    pub timeout: Duration,
    pub refresh: bool,
    pub cache_dir: Option<PathBuf>,
}

/// Handle the scoreboard command against ESPN.
pub async fn handle_scoreboard(params: ScoreboardParams) -> Result<ScoreboardRun> {
    let source = make_source(params.timeout, params.refresh, params.cache_dir.clone())?;
    run_scoreboard(&source, &params).await
}

/// Run the scoreboard pipeline against any box-score source.
///
/// Every input table is read and validated before the first fetch, so a
/// schema problem fails the run without touching the network.
pub async fn run_scoreboard<S: BoxScoreSource>(
    source: &S,
    params: &ScoreboardParams,
) -> Result<ScoreboardRun> {
    let roster = load_roster(&params.players_path, &params.teams_path)?;
    let stats = match &params.stats_path {
        Some(path) => Some(read_performance_stats(
            File::open(path)?,
            &path.display().to_string(),
        )?),
        None => None,
    };
    let games = resolve_games(params.games.clone())?;

    info!("Fetching {} game summary payload(s)", games.len());
    let payloads = fetch_games(source, &games, PayloadKind::Summary).await;
    let run = build_scoreboard(&roster, &payloads, params.matcher, stats.as_ref());

    if run.usage.is_empty() {
        warn!("No usage resolved from any game; slots follow depth chart only");
    }

    write_scoreboard(File::create(&params.output_path)?, &run.rows)?;

    // tarpaulin::skip - console output
    for row in &run.rows {
        println!("{}", format_row(row));
    }
    info!(
        "Wrote {} slots to {} ({} game(s) skipped)",
        run.rows.len(),
        params.output_path.display(),
        run.warnings.len()
    );

    Ok(run)
}
