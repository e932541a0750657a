// End to end in memory tests for the scores flow.
//
// - Drive the real router with tower::ServiceExt, no TCP listener.
// - Force updater ticks with scripted draws and observe them over HTTP.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use live_scores::modules::scores::adapters::outbound::draws::{RandomDraws, ScriptedDraws};
use live_scores::modules::scores::adapters::outbound::registry_in_memory::InMemoryScoreRegistry;
use live_scores::modules::scores::core::ports::DrawSource;
use live_scores::modules::scores::use_cases::update_scores::handler::ScoreUpdater;
use live_scores::shell::{self, config::AppConfig, http::router, state::AppState};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

struct Harness<TDraws: DrawSource> {
    app: Router,
    updater: ScoreUpdater<InMemoryScoreRegistry, TDraws>,
}

fn harness<TDraws: DrawSource>(draws: TDraws) -> Harness<TDraws> {
    let registry = Arc::new(InMemoryScoreRegistry::new());
    Harness {
        app: router(AppState {
            registry: registry.clone(),
        }),
        updater: ScoreUpdater::new(registry, draws),
    }
}

#[fixture]
fn scripted() -> Harness<ScriptedDraws> {
    harness(ScriptedDraws::new([0.2, 0.5, 0.95]))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn parse_score(value: &Value) -> (u32, u32) {
    let raw = value.as_str().unwrap();
    let (left, right) = raw.split_once(':').unwrap();
    (left.parse().unwrap(), right.parse().unwrap())
}

#[rstest]
#[tokio::test]
async fn it_should_follow_forced_ticks_over_http(scripted: Harness<ScriptedDraws>) {
    let Harness { app, mut updater } = scripted;

    let (status, body) = get(&app, "/e1/score").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "eventId": "e1", "currentScore": "0:0" }));

    updater.tick().await;
    assert_eq!(get(&app, "/e1/score").await.1["currentScore"], "1:0");

    updater.tick().await;
    assert_eq!(get(&app, "/e1/score").await.1["currentScore"], "1:1");

    updater.tick().await;
    assert_eq!(get(&app, "/e1/score").await.1["currentScore"], "1:1");
}

#[rstest]
#[tokio::test]
async fn it_should_list_events_created_through_the_score_route(scripted: Harness<ScriptedDraws>) {
    let Harness { app, .. } = scripted;

    assert_eq!(get(&app, "/debug/all").await, (StatusCode::OK, json!([])));

    get(&app, "/a/score").await;
    get(&app, "/b/score").await;
    get(&app, "/a/score").await;

    let (status, body) = get(&app, "/debug/all").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "eventId": "a", "currentScore": "0:0" },
            { "eventId": "b", "currentScore": "0:0" },
        ])
    );
}

#[rstest]
#[tokio::test]
async fn it_should_answer_404_for_unknown_routes(scripted: Harness<ScriptedDraws>) {
    let Harness { app, .. } = scripted;

    let (status, _) = get(&app, "/e1/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, all) = get(&app, "/debug/all").await;
    assert_eq!(all, json!([]));
}

#[rstest]
#[tokio::test]
async fn it_should_treat_debug_as_an_ordinary_event_id(scripted: Harness<ScriptedDraws>) {
    let Harness { app, .. } = scripted;

    let (status, body) = get(&app, "/debug/score").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "eventId": "debug", "currentScore": "0:0" }));

    get(&app, "/e1/score").await;
    let (_, all) = get(&app, "/debug/all").await;
    assert_eq!(
        all,
        json!([
            { "eventId": "debug", "currentScore": "0:0" },
            { "eventId": "e1", "currentScore": "0:0" },
        ])
    );
}

#[tokio::test]
async fn it_should_only_ever_increase_scores_seen_over_http() {
    let Harness { app, mut updater } = harness(RandomDraws::seeded(2024));
    for id in ["home", "away", "cup"] {
        get(&app, &format!("/{id}/score")).await;
    }

    let mut previous = vec![(0u32, 0u32); 3];
    for _ in 0..100 {
        updater.tick().await;
        let (_, all) = get(&app, "/debug/all").await;
        let current: Vec<(u32, u32)> = all
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| parse_score(&entry["currentScore"]))
            .collect();
        for (before, after) in previous.iter().zip(current.iter()) {
            assert!(after.0 >= before.0 && after.1 >= before.1);
            assert!(after.0 + after.1 <= before.0 + before.1 + 1);
        }
        previous = current;
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn it_should_keep_one_entry_per_id_while_ticking_concurrently() {
    let Harness { app, mut updater } = harness(RandomDraws::seeded(99));

    let ticking = tokio::spawn(async move {
        for _ in 0..50 {
            updater.tick().await;
            tokio::task::yield_now().await;
        }
    });
    let requests: Vec<_> = (0..100)
        .map(|n| {
            let app = app.clone();
            tokio::spawn(async move { get(&app, &format!("/match-{}/score", n % 10)).await })
        })
        .collect();
    for request in requests {
        assert_eq!(request.await.unwrap().0, StatusCode::OK);
    }
    ticking.await.unwrap();

    let (_, all) = get(&app, "/debug/all").await;
    let mut ids: Vec<&str> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["eventId"].as_str().unwrap())
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 10);
    assert_eq!(all.as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn it_should_build_the_service_from_config() {
    let config = AppConfig {
        seed: Some(1),
        update_interval: Duration::from_secs(3600),
        ..AppConfig::default()
    };
    let app = shell::build(&config);

    let (status, body) = get(&app.router, "/kickoff/score").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["currentScore"], "0:0");

    app.updater.shutdown().await.unwrap();
}
