//! Collector tests against a mocked CFBD API

use super::*;
use crate::models::SignificanceTag;
use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn client_for(server: &MockServer) -> CfbdClient {
    CfbdClient::with_base_url(&server.uri(), "test-token").unwrap()
}

fn settings() -> CollectSettings {
    CollectSettings {
        pacing: Pacing::none(),
        ..CollectSettings::default()
    }
}

async fn mount_games(server: &MockServer, year: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path("/games"))
        .and(query_param("year", year.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// One regular-season game per week, ids `1000 + week`.
fn schedule(weeks: u16) -> Value {
    Value::Array(
        (1..=weeks)
            .map(|w| json!({ "id": 1000 + w as u64, "week": w, "seasonType": "regular" }))
            .collect(),
    )
}

async fn mount_weekly(
    server: &MockServer,
    endpoint: &str,
    weeks: u16,
    body: impl Fn(u16) -> Value,
) {
    for w in 1..=weeks {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .and(query_param("week", w.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body(w)))
            .mount(server)
            .await;
    }
}

fn line_body(week: u16) -> Value {
    json!([
        {
            "id": 1000 + week as u64,
            "seasonType": "regular",
            "homeTeam": "Home",
            "awayTeam": "Away",
            "lines": [ { "provider": "Bovada", "spread": -3.0 } ]
        }
    ])
}

#[test]
fn test_max_week_of_empty_slate_is_zero() {
    assert_eq!(max_week(&[]), 0);

    let games: Vec<Game> = serde_json::from_value(schedule(12)).unwrap();
    assert_eq!(max_week(&games), 12);
}

#[tokio::test]
async fn test_failed_week_is_isolated() {
    let server = MockServer::start().await;
    mount_games(&server, 2015, schedule(15)).await;

    Mock::given(method("GET"))
        .and(path("/lines"))
        .and(query_param("week", "7"))
        .respond_with(ResponseTemplate::new(500))
        .with_priority(1)
        .mount(&server)
        .await;
    mount_weekly(&server, "/lines", 15, line_body).await;

    let client = client_for(&server);
    let collected = Collector::new(&client, settings())
        .fetch_betting_lines(Season::new(2015))
        .await
        .unwrap();

    let weeks: Vec<u16> = collected.data.iter().map(|r| r.week).collect();
    let expected: Vec<u16> = (1..=15).filter(|w| *w != 7).collect();
    assert_eq!(weeks, expected);

    assert_eq!(collected.failures.len(), 1);
    let failure = &collected.failures[0];
    assert_eq!(failure.week, Some(Week::new(7)));
    assert!(failure.error.is_api_error());
    assert_eq!(
        failure.to_string(),
        "betting lines for week 7 of 2015: API error: Internal Server Error (status: 500)"
    );
}

#[tokio::test]
async fn test_line_game_ids_come_from_that_week() {
    let server = MockServer::start().await;
    mount_games(&server, 2016, schedule(3)).await;
    mount_weekly(&server, "/lines", 3, line_body).await;

    let client = client_for(&server);
    let collected = Collector::new(&client, settings())
        .fetch_betting_lines(Season::new(2016))
        .await
        .unwrap();

    assert!(collected.is_complete());
    for row in &collected.data {
        assert_eq!(row.game_id.as_u64(), 1000 + row.week as u64);
    }
}

#[tokio::test]
async fn test_zero_games_yields_zero_rows() {
    let server = MockServer::start().await;
    mount_games(&server, 1999, json!([])).await;

    Mock::given(method("GET"))
        .and(path("/lines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ratings/elo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let collector = Collector::new(&client, settings());

    let lines = collector.fetch_betting_lines(Season::new(1999)).await.unwrap();
    let elo = collector.fetch_elo_ratings(Season::new(1999)).await.unwrap();

    assert!(lines.data.is_empty() && lines.is_complete());
    assert!(elo.data.is_empty() && elo.is_complete());
}

#[tokio::test]
async fn test_zero_games_skips_media_lookup() {
    let server = MockServer::start().await;
    mount_games(&server, 2020, json!([])).await;
    Mock::given(method("GET"))
        .and(path("/games/media"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let settings = CollectSettings {
        with_media: true,
        ..settings()
    };
    let lines = Collector::new(&client, settings)
        .fetch_betting_lines(Season::new(2020))
        .await
        .unwrap();

    assert!(lines.data.is_empty() && lines.is_complete());
}

#[tokio::test]
async fn test_games_failure_fails_the_season() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/games"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = Collector::new(&client, settings())
        .fetch_elo_ratings(Season::new(2010))
        .await
        .unwrap_err();

    assert!(matches!(err, CfbdError::Api { status: 503, .. }));
}

#[tokio::test]
async fn test_elo_rows_per_team_week() {
    let server = MockServer::start().await;
    mount_games(&server, 2012, schedule(2)).await;
    mount_weekly(&server, "/ratings/elo", 2, |w| {
        json!([
            { "year": 2012, "team": "Alabama", "conference": "SEC", "elo": 2000 + w as i64 },
            { "year": 2012, "team": "Notre Dame", "conference": "FBS Independents", "elo": 1900 }
        ])
    })
    .await;

    let client = client_for(&server);
    let collected = Collector::new(&client, settings())
        .fetch_elo_ratings(Season::new(2012))
        .await
        .unwrap();

    assert_eq!(collected.data.len(), 4);
    assert_eq!(collected.data[2].week, 2);
    assert_eq!(collected.data[2].team, "Alabama");
    assert_eq!(collected.data[2].elo, Some(2002));
}

#[tokio::test]
async fn test_records_filtered_to_fbs() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/records"))
        .and(query_param("year", "2014"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "team": "Florida State", "classification": "fbs",
              "total": { "games": 14, "wins": 13, "losses": 1, "ties": 0 } },
            { "team": "Villanova", "classification": "fcs",
              "total": { "games": 14, "wins": 11, "losses": 3, "ties": 0 } }
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let rows = Collector::new(&client, settings())
        .fetch_records(Season::new(2014))
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].team, "Florida State");
    let total = &rows[0];
    assert!(total.total_wins.unwrap() + total.total_losses.unwrap() <= total.total_games.unwrap());
}

#[tokio::test]
async fn test_significant_games_end_to_end() {
    let server = MockServer::start().await;
    mount_games(
        &server,
        2016,
        json!([
            { "id": 1, "week": 4, "seasonType": "regular",
              "homeTeam": "Home U", "homePoints": 20, "awayTeam": "Away State", "awayPoints": 24 },
            { "id": 2, "week": 4, "seasonType": "regular",
              "homeTeam": "Nobody", "homePoints": 7, "awayTeam": "Also Nobody", "awayPoints": 3 },
            { "id": 3, "week": 1, "seasonType": "postseason",
              "homeTeam": "Bowl Home", "homePoints": 30, "awayTeam": "Bowl Away", "awayPoints": 27 }
        ]),
    )
    .await;
    mount_weekly(&server, "/rankings", LOOKUP_LAST_WEEK, |w| {
        if w == 4 {
            json!([{ "week": 4, "polls": [
                { "poll": "Coaches Poll", "ranks": [ { "rank": 1, "school": "Nobody" } ] },
                { "poll": "AP Top 25", "ranks": [
                    { "rank": 5, "school": "Home U" },
                    { "rank": 10, "school": "Away State" }
                ] }
            ] }])
        } else {
            json!([])
        }
    })
    .await;

    Mock::given(method("GET"))
        .and(path("/games/media"))
        .and(query_param("week", "9"))
        .respond_with(ResponseTemplate::new(502))
        .with_priority(1)
        .mount(&server)
        .await;
    mount_weekly(&server, "/games/media", LOOKUP_LAST_WEEK, |w| {
        if w == 4 {
            json!([{ "id": 1, "outlet": "FOX" }, { "id": 2, "outlet": null }])
        } else {
            json!([])
        }
    })
    .await;

    let client = client_for(&server);
    let collected = Collector::new(&client, settings())
        .fetch_significant_games(Season::new(2016))
        .await
        .unwrap();

    assert_eq!(collected.data.len(), 2);

    let upset = &collected.data[0];
    assert_eq!(upset.home_team.as_deref(), Some("Home U"));
    assert!(upset.has_tag(SignificanceTag::UpsetVictory));
    assert_eq!(upset.outlet.as_deref(), Some("FOX"));

    let bowl = &collected.data[1];
    assert_eq!(bowl.significance, vec![SignificanceTag::BowlGame]);
    assert_eq!(bowl.outlet, None);

    assert_eq!(collected.failures.len(), 1);
    assert_eq!(collected.failures[0].dataset, "media");
    assert_eq!(collected.failures[0].week, Some(Week::new(9)));
}

#[tokio::test]
async fn test_null_rank_in_other_poll_keeps_upset() {
    let server = MockServer::start().await;
    mount_games(
        &server,
        2016,
        json!([
            { "id": 1, "week": 4, "seasonType": "regular",
              "homeTeam": "Home U", "homePoints": 20, "awayTeam": "Away State", "awayPoints": 24 }
        ]),
    )
    .await;
    mount_weekly(&server, "/rankings", LOOKUP_LAST_WEEK, |w| {
        if w == 4 {
            json!([{ "week": 4, "polls": [
                { "poll": "FCS Coaches Poll", "ranks": [ { "rank": null, "school": "Someone" } ] },
                { "poll": "AP Top 25", "ranks": [
                    { "rank": 5, "school": "Home U" },
                    { "rank": 10, "school": "Away State" }
                ] }
            ] }])
        } else {
            json!([])
        }
    })
    .await;
    mount_weekly(&server, "/games/media", LOOKUP_LAST_WEEK, |_| json!([])).await;

    let client = client_for(&server);
    let collected = Collector::new(&client, settings())
        .fetch_significant_games(Season::new(2016))
        .await
        .unwrap();

    assert!(collected.is_complete());
    assert_eq!(collected.data.len(), 1);
    assert_eq!(
        collected.data[0].significance,
        vec![SignificanceTag::RankedMatchup, SignificanceTag::UpsetVictory]
    );
}

#[tokio::test]
async fn test_betting_lines_with_media() {
    let server = MockServer::start().await;
    mount_games(&server, 2018, schedule(1)).await;
    mount_weekly(&server, "/lines", 1, line_body).await;
    mount_weekly(&server, "/games/media", LOOKUP_LAST_WEEK, |w| {
        json!([{ "id": 1000 + w as u64, "outlet": "ABC" }])
    })
    .await;

    let client = client_for(&server);
    let settings = CollectSettings {
        with_media: true,
        ..settings()
    };
    let collected = Collector::new(&client, settings)
        .fetch_betting_lines(Season::new(2018))
        .await
        .unwrap();

    assert_eq!(collected.data.len(), 1);
    assert_eq!(collected.data[0].outlet.as_deref(), Some("ABC"));
}

#[test]
fn test_fetch_failure_display_for_season() {
    let failure = FetchFailure::season(
        "team records",
        Season::new(2001),
        CfbdError::Api {
            status: 429,
            reason: "Too Many Requests".into(),
            body: String::new(),
        },
    );
    assert_eq!(
        failure.to_string(),
        "team records for 2001: API error: Too Many Requests (status: 429)"
    );
}
