//! Unit tests for HTTP client functionality

use super::*;
use crate::core::build_client;
use std::cell::Cell;
use std::time::Duration;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn test_client(server: &MockServer) -> EspnClient {
    let client = build_client(Duration::from_secs(5)).unwrap();
    EspnClient::with_base_urls(
        client,
        &format!("{}/game", server.uri()),
        &format!("{}/summary", server.uri()),
    )
}

/// Counts calls and serves a fixed body
struct CountingSource {
    calls: Cell<u32>,
}

impl BoxScoreSource for CountingSource {
    async fn fetch(&self, game_id: GameId, _kind: PayloadKind) -> Result<String> {
        self.calls.set(self.calls.get() + 1);
        Ok(format!("payload-{}", game_id))
    }
}

#[cfg(test)]
mod http_tests {
    use super::*;

    #[test]
    fn test_game_urls() {
        let client = EspnClient::new(Client::new());
        assert_eq!(
            client.game_url(GameId::new(401752665), PayloadKind::Html),
            "https://www.espn.com/college-football/game/_/gameId/401752665"
        );
        assert_eq!(
            client.game_url(GameId::new(401752665), PayloadKind::Summary),
            "https://site.api.espn.com/apis/site/v2/sports/football/college-football/summary?event=401752665"
        );
    }

    #[tokio::test]
    async fn test_fetch_summary_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/summary"))
            .and(query_param("event", "401752669"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"statistics":[]}"#))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let body = client
            .fetch(GameId::new(401752669), PayloadKind::Summary)
            .await
            .unwrap();
        assert_eq!(body, r#"{"statistics":[]}"#);
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/game/401752665"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let err = client
            .fetch(GameId::new(401752665), PayloadKind::Html)
            .await
            .unwrap_err();
        match err {
            FantasyError::FetchStatus { game_id, status } => {
                assert_eq!(game_id, "401752665");
                assert_eq!(status, 404);
            }
            other => panic!("Expected FetchStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_timeout_is_an_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/game/1"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&mock_server)
            .await;

        let client = EspnClient::with_base_urls(
            build_client(Duration::from_millis(100)).unwrap(),
            &format!("{}/game", mock_server.uri()),
            &format!("{}/summary", mock_server.uri()),
        );
        let err = client
            .fetch(GameId::new(1), PayloadKind::Html)
            .await
            .unwrap_err();
        assert!(matches!(err, FantasyError::Http(_)));
    }

    #[tokio::test]
    async fn test_fetch_games_keeps_going_after_failure() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/game/1"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/game/2"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let payloads = fetch_games(
            &client,
            &[GameId::new(1), GameId::new(2)],
            PayloadKind::Html,
        )
        .await;

        assert_eq!(payloads.len(), 2);
        assert!(payloads[0].body.is_err());
        assert!(payloads[0].body.as_ref().unwrap_err().contains("500"));
        assert_eq!(payloads[1].body.as_deref(), Ok("<html></html>"));
    }

    #[tokio::test]
    async fn test_cached_source_hits_disk_second_time() {
        let dir = tempfile::tempdir().unwrap();
        let source = CachedSource::new(
            CountingSource { calls: Cell::new(0) },
            dir.path().to_path_buf(),
            false,
        );

        let first = source.fetch(GameId::new(7), PayloadKind::Summary).await.unwrap();
        let second = source.fetch(GameId::new(7), PayloadKind::Summary).await.unwrap();
        assert_eq!(first, "payload-7");
        assert_eq!(second, "payload-7");
        assert_eq!(source.inner.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_cached_source_refresh_bypasses_disk() {
        let dir = tempfile::tempdir().unwrap();
        let source = CachedSource::new(
            CountingSource { calls: Cell::new(0) },
            dir.path().to_path_buf(),
            true,
        );

        source.fetch(GameId::new(7), PayloadKind::Html).await.unwrap();
        source.fetch(GameId::new(7), PayloadKind::Html).await.unwrap();
        assert_eq!(source.inner.calls.get(), 2);
    }
}
