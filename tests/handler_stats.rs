mod common;

use serde_json::{Value, json};

#[tokio::test]
async fn test_stats_seeded_counters() {
    let server = common::create_test_server(common::seeded_backend());

    let response = server.get("/stats/ghjk").await;

    response.assert_status_ok();
    assert_eq!(
        response.text(),
        r#"{"Count":387,"Days":{"2015-07-22T00:00:00Z":14,"2015-11-03T00:00:00Z":76,"2016-01-03T00:00:00Z":31}}"#
    );
}

#[tokio::test]
async fn test_stats_not_found() {
    let server = common::create_test_server(common::seeded_backend());

    let response = server.get("/stats/china").await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "not_found");
    assert_eq!(body["error"]["message"], "Stats do not exist");
}

#[tokio::test]
async fn test_stats_after_create_and_fetch() {
    let server = common::create_test_server(common::seeded_backend());

    let created: Value = server
        .post("/create")
        .json(&json!({ "Url": "http://www.nationalreview.com" }))
        .await
        .json();
    let code = created["Url"].as_str().unwrap().to_string();

    server.get(&format!("/{}", code)).await;

    let response = server.get(&format!("/stats/{}", code)).await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "Count": 1,
        "Days": { "2016-06-16T00:00:00Z": 1 }
    }));
}

#[tokio::test]
async fn test_stats_link_without_visits_is_not_found() {
    let server = common::create_test_server(common::seeded_backend());

    // `blah` has a URL but no hit counters yet.
    server.get("/stats/blah").await.assert_status_not_found();
}

#[tokio::test]
async fn test_stats_corrupt_counter_is_500() {
    let backend = common::seeded_backend();
    backend.insert_hash("hits:bad", &[("Total", "3"), ("40", "three")]);
    let server = common::create_test_server(backend);

    let response = server.get("/stats/bad").await;

    response.assert_status_internal_server_error();
    let body: Value = response.json();
    assert_eq!(body["error"]["message"], "Could not fetch stats");
}
