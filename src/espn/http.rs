use std::path::PathBuf;

use reqwest::Client;
use tracing::{debug, warn};

use crate::core::{payload_cache_path, try_read_to_string, write_string};
use crate::error::FantasyError;
use crate::espn::types::PayloadKind;
use crate::{GameId, Result};

#[cfg(test)]
mod tests;

/// Rendered college football game pages.
pub const GAME_PAGE_BASE_URL: &str = "https://www.espn.com/college-football/game/_/gameId";

/// Site API summary endpoint (`?event={game_id}`).
pub const SUMMARY_BASE_URL: &str =
    "https://site.api.espn.com/apis/site/v2/sports/football/college-football/summary";

/// Fetches the raw box score for one game.
///
/// Implementations return the payload text on success and an error for
/// transport failures, timeouts and non-success statuses alike.
#[allow(async_fn_in_trait)]
pub trait BoxScoreSource {
    async fn fetch(&self, game_id: GameId, kind: PayloadKind) -> Result<String>;
}

/// Box-score source backed by ESPN's public endpoints
#[derive(Debug, Clone)]
pub struct EspnClient {
    client: Client,
    game_page_base: String,
    summary_base: String,
}

impl EspnClient {
    pub fn new(client: Client) -> Self {
        Self::with_base_urls(client, GAME_PAGE_BASE_URL, SUMMARY_BASE_URL)
    }

    /// Point the client at alternate hosts (mirrors, test servers).
    pub fn with_base_urls(client: Client, game_page_base: &str, summary_base: &str) -> Self {
        Self {
            client,
            game_page_base: game_page_base.trim_end_matches('/').to_string(),
            summary_base: summary_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn game_url(&self, game_id: GameId, kind: PayloadKind) -> String {
        match kind {
            PayloadKind::Html => format!("{}/{}", self.game_page_base, game_id),
            PayloadKind::Summary => format!("{}?event={}", self.summary_base, game_id),
        }
    }
}

impl BoxScoreSource for EspnClient {
    async fn fetch(&self, game_id: GameId, kind: PayloadKind) -> Result<String> {
        let url = self.game_url(game_id, kind);
        debug!("GET {}", url);

        let res = self.client.get(&url).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(FantasyError::FetchStatus {
                game_id: game_id.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(res.text().await?)
    }
}

/// Wraps another source with the on-disk payload cache.
///
/// Cache hits skip the network unless `refresh` is set; successful fetches
/// are written back. Cache write failures are logged and otherwise ignored.
#[derive(Debug, Clone)]
pub struct CachedSource<S> {
    inner: S,
    root: PathBuf,
    refresh: bool,
}

impl<S: BoxScoreSource> CachedSource<S> {
    pub fn new(inner: S, root: PathBuf, refresh: bool) -> Self {
        Self {
            inner,
            root,
            refresh,
        }
    }
}

impl<S: BoxScoreSource> BoxScoreSource for CachedSource<S> {
    async fn fetch(&self, game_id: GameId, kind: PayloadKind) -> Result<String> {
        let path = payload_cache_path(&self.root, kind, game_id);

        if !self.refresh {
            if let Some(body) = try_read_to_string(&path) {
                debug!("Game {} {} payload loaded from {}", game_id, kind, path.display());
                return Ok(body);
            }
        }

        let body = self.inner.fetch(game_id, kind).await?;
        if let Err(e) = write_string(&path, &body) {
            warn!("Could not cache game {} payload at {}: {}", game_id, path.display(), e);
        }
        Ok(body)
    }
}

/// Outcome of fetching one game: the payload text or why it is missing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamePayload {
    pub game_id: GameId,
    pub kind: PayloadKind,
    pub body: std::result::Result<String, String>,
}

impl GamePayload {
    pub fn fetched(game_id: GameId, kind: PayloadKind, body: impl Into<String>) -> Self {
        Self {
            game_id,
            kind,
            body: Ok(body.into()),
        }
    }

    pub fn failed(game_id: GameId, kind: PayloadKind, reason: impl Into<String>) -> Self {
        Self {
            game_id,
            kind,
            body: Err(reason.into()),
        }
    }
}

/// Fetch every game in order, one at a time. A failed game never aborts the
/// batch; it is returned as a failed [`GamePayload`].
pub async fn fetch_games<S: BoxScoreSource>(
    source: &S,
    games: &[GameId],
    kind: PayloadKind,
) -> Vec<GamePayload> {
    let mut payloads = Vec::with_capacity(games.len());
    for &game_id in games {
        let payload = match source.fetch(game_id, kind).await {
            Ok(body) => GamePayload::fetched(game_id, kind, body),
            Err(e) => GamePayload::failed(game_id, kind, e.to_string()),
        };
        payloads.push(payload);
    }
    payloads
}
