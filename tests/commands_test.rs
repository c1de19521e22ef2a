//! Integration tests for command handlers

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use cfb_fantasy::{
    commands::{
        scoreboard::{run_scoreboard, ScoreboardParams},
        snapcounts::{run_snapcounts, SnapcountsParams},
    },
    core::build_client,
    espn::http::EspnClient,
    ingest::IngestWarning,
    storage::{read_scoreboard, UsageRecord},
    FantasyError, GameId, MatcherKind, PlayerId, TeamId,
};
use serde_json::json;
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

const PLAYERS_CSV: &str = "\
player_id,player_name,team_id,position,depth,roster_url,injury_status,espn_id
1,Jalen Milroe,1,QB,1,https://rolltide.com/roster,Active,4432577
2,Ty Simpson,1,QB,2,https://rolltide.com/roster,Active,4567102
3,Justice Haynes,1,RB,1,https://rolltide.com/roster,Active,4870000
4,DJ Uiagalelei,2,QB,1,https://seminoles.com/roster,Active,4429086
";

const TEAMS_CSV: &str = "\
team_id,team_name,conference,roster_url
1,Alabama,SEC,https://rolltide.com/roster
2,Florida State,ACC,https://seminoles.com/roster
";

const FAILED_GAME: u64 = 401628374;
const GOOD_GAME: u64 = 401628375;

fn write_inputs(dir: &TempDir, players: &str) -> (PathBuf, PathBuf) {
    let players_path = dir.path().join("players.csv");
    let teams_path = dir.path().join("teams.csv");
    fs::write(&players_path, players).unwrap();
    fs::write(&teams_path, TEAMS_CSV).unwrap();
    (players_path, teams_path)
}

fn test_client(server: &MockServer) -> EspnClient {
    EspnClient::with_base_urls(
        build_client(Duration::from_secs(5)).unwrap(),
        &format!("{}/game", server.uri()),
        &format!("{}/summary", server.uri()),
    )
}

fn summary_body() -> String {
    json!({
        "boxscore": {
            "players": [{
                "team": { "displayName": "Alabama Crimson Tide" },
                "statistics": [
                    {
                        "name": "passing",
                        "keys": ["completions/passingAttempts", "passingYards", "passingTouchdowns", "interceptions"],
                        "athletes": [
                            { "athlete": { "id": "4432577", "displayName": "Jalen Milroe" },
                              "stats": ["18/27", "254", "2", "0"] }
                        ]
                    },
                    {
                        "name": "rushing",
                        "keys": ["rushingAttempts", "rushingYards", "rushingTouchdowns"],
                        "athletes": [
                            { "athlete": { "id": "4432577", "displayName": "Jalen Milroe" },
                              "stats": ["8", "26", "0"] },
                            { "athlete": { "id": 4870000, "displayName": "Justice Haynes" },
                              "stats": ["14", "88", "1"] },
                            { "athlete": { "id": "9999999", "displayName": "Walk On" },
                              "stats": ["1", "3", "0"] }
                        ]
                    }
                ]
            }]
        }
    })
    .to_string()
}

async fn mount_games(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/summary"))
        .and(query_param("event", FAILED_GAME.to_string()))
        .respond_with(ResponseTemplate::new(503))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/summary"))
        .and(query_param("event", GOOD_GAME.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_string(summary_body()))
        .mount(server)
        .await;
}

fn scoreboard_params(players: &Path, teams: &Path, output: PathBuf) -> ScoreboardParams {
    ScoreboardParams {
        players_path: players.to_path_buf(),
        teams_path: teams.to_path_buf(),
        stats_path: None,
        output_path: output,
        games: vec![GameId::new(FAILED_GAME), GameId::new(GOOD_GAME)],
        matcher: MatcherKind::Substring,
        timeout: Duration::from_secs(5),
        refresh: false,
        cache_dir: None,
    }
}

#[tokio::test]
async fn test_scoreboard_skips_failed_game_and_scores_the_rest() {
    let server = MockServer::start().await;
    mount_games(&server).await;
    let dir = TempDir::new().unwrap();
    let (players, teams) = write_inputs(&dir, PLAYERS_CSV);
    let output = dir.path().join("scoreboard.csv");

    let run = run_scoreboard(
        &test_client(&server),
        &scoreboard_params(&players, &teams, output.clone()),
    )
    .await
    .unwrap();

    assert_eq!(run.warnings.len(), 1);
    assert!(matches!(
        &run.warnings[0],
        IngestWarning::FetchFailed { game_id, .. } if game_id.as_u64() == FAILED_GAME
    ));

    // Milroe: 27 pass attempts + 8 carries; unknown provider id dropped
    assert_eq!(
        run.usage,
        vec![
            UsageRecord {
                player_id: PlayerId::new(1),
                team_id: TeamId::new(1),
                snaps: 35,
            },
            UsageRecord {
                player_id: PlayerId::new(3),
                team_id: TeamId::new(1),
                snaps: 14,
            },
        ]
    );

    let written = read_scoreboard(fs::File::open(&output).unwrap(), "scoreboard.csv").unwrap();
    let summary: Vec<(String, String, f64)> = written
        .iter()
        .map(|r| (r.slot_label.clone(), r.player_name.clone(), r.fantasy_points))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Alabama QB1".to_string(), "Jalen Milroe".to_string(), 24.8),
            ("Alabama QB2".to_string(), "Ty Simpson".to_string(), 0.0),
            ("Alabama RB1".to_string(), "Justice Haynes".to_string(), 14.8),
            ("Florida State QB1".to_string(), "DJ Uiagalelei".to_string(), 0.0),
        ]
    );
    assert_eq!(written[0].roster_url, "https://rolltide.com/roster");
}

#[tokio::test]
async fn test_scoreboard_output_is_idempotent() {
    let server = MockServer::start().await;
    mount_games(&server).await;
    let dir = TempDir::new().unwrap();
    let (players, teams) = write_inputs(&dir, PLAYERS_CSV);
    let client = test_client(&server);

    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");
    run_scoreboard(&client, &scoreboard_params(&players, &teams, first.clone()))
        .await
        .unwrap();
    run_scoreboard(&client, &scoreboard_params(&players, &teams, second.clone()))
        .await
        .unwrap();

    assert_eq!(fs::read(first).unwrap(), fs::read(second).unwrap());
}

#[tokio::test]
async fn test_stats_table_supplies_points() {
    let server = MockServer::start().await;
    mount_games(&server).await;
    let dir = TempDir::new().unwrap();
    let (players, teams) = write_inputs(&dir, PLAYERS_CSV);
    let stats = dir.path().join("stats.csv");
    fs::write(
        &stats,
        "player_id,rushing_yards,receiving_yards,passing_yards,tds,int\n4,26,5,254,2,0\n",
    )
    .unwrap();

    let mut params = scoreboard_params(&players, &teams, dir.path().join("out.csv"));
    params.stats_path = Some(stats);
    let run = run_scoreboard(&test_client(&server), &params).await.unwrap();

    let points: Vec<f64> = run.rows.iter().map(|r| r.fantasy_points).collect();
    assert_eq!(points, vec![0.0, 0.0, 0.0, 25.3]);
}

#[tokio::test]
async fn test_missing_roster_column_fails_before_fetching() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let (players, teams) = write_inputs(
        &dir,
        "player_id,player_name,team_id,position,depth,roster_url,injury_status\n1,A,1,QB,1,u,\n",
    );
    let output = dir.path().join("scoreboard.csv");

    let err = run_scoreboard(
        &test_client(&server),
        &scoreboard_params(&players, &teams, output.clone()),
    )
    .await
    .unwrap_err();

    match err {
        FantasyError::MissingColumn { column, .. } => assert_eq!(column, "espn_id"),
        other => panic!("Expected MissingColumn, got {other:?}"),
    }
    assert!(!output.exists());
}

#[tokio::test]
async fn test_snapcounts_from_game_pages() {
    let server = MockServer::start().await;
    let page = r#"
        <html><body>
          <table>
            <caption>Alabama Passing</caption>
            <tbody>
              <tr><td>Jalen Milroe</td><td>18/27</td></tr>
              <tr><td>Team</td></tr>
            </tbody>
          </table>
          <table>
            <caption>Alabama Rushing</caption>
            <tbody>
              <tr><td>Haynes</td><td>14</td></tr>
              <tr><td>Nobody Known</td><td>3</td></tr>
              <tr><td>Jalen Milroe</td><td>-</td></tr>
            </tbody>
          </table>
        </body></html>
    "#;
    Mock::given(method("GET"))
        .and(path(format!("/game/{}", GOOD_GAME)))
        .respond_with(ResponseTemplate::new(200).set_body_string(page))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/game/{}", FAILED_GAME)))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let (players, teams) = write_inputs(&dir, PLAYERS_CSV);
    let output = dir.path().join("espn_snapcounts.csv");
    let params = SnapcountsParams {
        players_path: players,
        teams_path: teams,
        output_path: output.clone(),
        games: vec![GameId::new(FAILED_GAME), GameId::new(GOOD_GAME)],
        matcher: MatcherKind::Substring,
        timeout: Duration::from_secs(5),
        refresh: false,
        cache_dir: None,
    };

    let report = run_snapcounts(&test_client(&server), &params).await.unwrap();
    assert_eq!(report.records, 2);
    assert_eq!(report.skipped_games, 1);
    assert!(report.written);
    assert_eq!(
        fs::read_to_string(output).unwrap(),
        "player_id,team_id,snaps\n1,1,27\n3,1,14\n"
    );
}

#[tokio::test]
async fn test_snapcounts_writes_nothing_when_no_usage() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let (players, teams) = write_inputs(&dir, PLAYERS_CSV);
    let output = dir.path().join("espn_snapcounts.csv");
    let params = SnapcountsParams {
        players_path: players,
        teams_path: teams,
        output_path: output.clone(),
        games: vec![GameId::new(GOOD_GAME)],
        matcher: MatcherKind::Substring,
        timeout: Duration::from_secs(5),
        refresh: false,
        cache_dir: None,
    };

    let report = run_snapcounts(&test_client(&server), &params).await.unwrap();
    assert!(!report.written);
    assert_eq!(report.skipped_games, 1);
    assert!(!output.exists());
}
