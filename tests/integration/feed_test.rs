//! Integration tests for feed annotation and availability windows.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use roster_auth::session::Session;

use helpers::TestApp;

fn logged_in() -> (TestApp, String) {
    let app = TestApp::new();
    let token = app.login("alice", Session::new("u-1").with_email("alice@roster.test"));
    (app, token)
}

fn listings() -> serde_json::Value {
    // Clock is frozen at 2025-06-01T12:00:00Z.
    json!({
        "profiles": [
            {
                "id": "p-1",
                "username": "daytime",
                "availability": "2025-06-01T10:00:00Z",
                "availability_exp": "2025-06-01T18:00:00Z"
            },
            {
                "id": "p-2",
                "username": "edge",
                "availability": "2025-06-01 12:00:00+00",
                "availability_exp": "2025-06-01T12:00:00"
            },
            { "id": "p-3", "username": "never", "availability": null },
            {
                "id": "p-4",
                "availability": "2025-05-31T20:00:00Z",
                "availability_exp": "2025-06-01T04:00:00Z"
            },
            {
                "id": "p-5",
                "availability": "tomorrow",
                "availability_exp": "2025-06-02T00:00:00Z"
            }
        ]
    })
}

#[tokio::test]
async fn test_feed_requires_session() {
    let app = TestApp::new();

    let response = app.request("POST", "/api/feed", Some(listings()), None).await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn test_feed_annotates_in_order() {
    let (app, token) = logged_in();

    let response = app
        .request("POST", "/api/feed", Some(listings()), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let entries = response.body["data"]["entries"].as_array().unwrap();
    let flags: Vec<(&str, bool)> = entries
        .iter()
        .map(|e| (e["id"].as_str().unwrap(), e["online"].as_bool().unwrap()))
        .collect();
    assert_eq!(
        flags,
        vec![
            ("p-1", true),
            ("p-2", true),
            ("p-3", false),
            ("p-4", false),
            ("p-5", false),
        ]
    );
    assert_eq!(response.body["data"]["online"], 2);
    assert_eq!(response.body["data"]["evaluated_at"], "2025-06-01T12:00:00Z");
}

#[tokio::test]
async fn test_feed_online_only() {
    let (app, token) = logged_in();
    let mut body = listings();
    body["online_only"] = json!(true);

    let response = app.request("POST", "/api/feed", Some(body), Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    let ids: Vec<&str> = response.body["data"]["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["p-1", "p-2"]);
}

#[tokio::test]
async fn test_schedule_opens_configured_window() {
    let (app, token) = logged_in();

    let response = app
        .request(
            "POST",
            "/api/availability/schedule",
            Some(json!({ "start": "2025-06-01T09:00:00Z" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["user_id"], "u-1");
    assert_eq!(data["start"], "2025-06-01T09:00:00Z");
    assert_eq!(data["end"], "2025-06-01T17:00:00Z");
    assert_eq!(data["online"], true);
}

#[tokio::test]
async fn test_schedule_in_the_future_is_offline_now() {
    let (app, token) = logged_in();

    let response = app
        .request(
            "POST",
            "/api/availability/schedule",
            Some(json!({ "start": "2025-06-02T09:00:00Z" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["online"], false);
}

#[tokio::test]
async fn test_schedule_rejects_bad_start() {
    let (app, token) = logged_in();

    for start in ["", "next tuesday"] {
        let response = app
            .request(
                "POST",
                "/api/availability/schedule",
                Some(json!({ "start": start })),
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{start:?}");
        assert_eq!(response.body["error"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn test_go_online_now() {
    let (app, token) = logged_in();

    let response = app
        .request(
            "POST",
            "/api/availability/now",
            Some(json!({ "hours": 1, "minutes": 30 })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["start"], "2025-06-01T12:00:00Z");
    assert_eq!(data["end"], "2025-06-01T13:30:00Z");
    assert_eq!(data["online"], true);
}

#[tokio::test]
async fn test_go_online_rejects_zero_and_out_of_range() {
    let (app, token) = logged_in();

    for body in [
        json!({ "hours": 0, "minutes": 0 }),
        json!({}),
        json!({ "hours": 1, "minutes": 75 }),
    ] {
        let response = app
            .request("POST", "/api/availability/now", Some(body.clone()), Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(response.body["error"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn test_schedule_past_max_date_is_rejected() {
    let (app, token) = logged_in();

    let response = app
        .request(
            "POST",
            "/api/availability/schedule",
            Some(json!({ "start": "+262142-12-31T23:00:00" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}
