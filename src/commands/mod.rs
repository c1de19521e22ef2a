//! Command implementations for the college football fantasy CLI

pub mod common;
pub mod matchup;
pub mod scoreboard;
pub mod snapcounts;


use tracing::warn;

use crate::{error::FantasyError, GameId, Result, GAMES_ENV_VAR};

/// Game ids from the command line, else from the `CFB_FANTASY_GAMES`
/// environment variable (comma-separated).
///
/// Entries in the variable that are not valid ids are logged and skipped.
pub fn resolve_games(games: Vec<GameId>) -> Result<Vec<GameId>> {
    if !games.is_empty() {
        return Ok(games);
    }

    let from_env = std::env::var(GAMES_ENV_VAR)
        .ok()
        .map(|raw| parse_game_list(&raw))
        .unwrap_or_default();

    if from_env.is_empty() {
        return Err(FantasyError::MissingGames {
            env_var: GAMES_ENV_VAR.to_string(),
        });
    }
    Ok(from_env)
}

fn parse_game_list(raw: &str) -> Vec<GameId> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| match s.parse::<GameId>() {
            Ok(id) => Some(id),
            Err(_) => {
                warn!("Ignoring invalid game id '{}' in {}", s, GAMES_ENV_VAR);
                None
            }
        })
        .collect()
}
