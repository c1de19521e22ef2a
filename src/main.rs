//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use std::time::Duration;

use anyhow::Context;
use cfb_fantasy::{
    cli::{Cli, Commands},
    commands::{
        matchup::{handle_matchup, MatchupParams},
        scoreboard::{handle_scoreboard, ScoreboardParams},
        snapcounts::{handle_snapcounts, SnapcountsParams},
    },
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = Cli::parse();
    init_logging(app.verbose);

    match app.command {
        Commands::Snapcounts {
            roster,
            fetch,
            output,
        } => {
            handle_snapcounts(SnapcountsParams {
                players_path: roster.players,
                teams_path: roster.teams,
                output_path: output,
                games: fetch.games,
                matcher: fetch.matcher,
                timeout: Duration::from_secs(fetch.timeout_secs),
                refresh: fetch.refresh,
                cache_dir: None,
            })
            .await
            .context("snapcounts failed")?;
        }

        Commands::Scoreboard {
            roster,
            fetch,
            stats,
            output,
        } => {
            handle_scoreboard(ScoreboardParams {
                players_path: roster.players,
                teams_path: roster.teams,
                stats_path: stats,
                output_path: output,
                games: fetch.games,
                matcher: fetch.matcher,
                timeout: Duration::from_secs(fetch.timeout_secs),
                refresh: fetch.refresh,
                cache_dir: None,
            })
            .await
            .context("scoreboard failed")?;
        }

        Commands::Matchup {
            scoreboard,
            selections,
            style,
        } => {
            handle_matchup(MatchupParams {
                scoreboard_path: scoreboard,
                style,
                selections,
            })
            .context("matchup failed")?;
        }
    }

    Ok(())
}
