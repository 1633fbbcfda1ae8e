//! Integration tests for the session gate.

mod helpers;

use axum::http::StatusCode;

use roster_auth::session::Session;

use helpers::{ADMIN_EMAIL, TestApp};

#[tokio::test]
async fn test_protected_path_without_session_redirects_to_login() {
    let app = TestApp::new();

    let response = app.request("GET", "/profile/42", None, None).await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), Some("/auth/login"));
    assert!(response.header("x-user-id").is_none());
}

#[tokio::test]
async fn test_unknown_token_redirects_to_login() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/me", None, Some("stale")).await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), Some("/auth/login"));
}

#[tokio::test]
async fn test_exempt_paths_pass_without_identity() {
    let app = TestApp::new();
    let token = app.login("alice", Session::new("u-1").with_email("alice@roster.test"));

    for path in ["/", "/auth/login", "/api/health"] {
        let response = app.request("GET", path, None, Some(&token)).await;
        assert_eq!(response.status, StatusCode::OK, "{path}");
        assert!(response.header("x-user-id").is_none(), "{path}");
    }
}

#[tokio::test]
async fn test_exempt_matching_is_exact() {
    let app = TestApp::new();

    let response = app.request("GET", "/auth/login/", None, None).await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn test_login_page_echoes_error_code() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/auth/login?error=session_unavailable", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["page"], "login");
    assert_eq!(response.body["data"]["error"], "session_unavailable");
}

#[tokio::test]
async fn test_session_identity_on_request_and_response() {
    let app = TestApp::new();
    let token = app.login(
        "alice",
        Session::new("u-1")
            .with_email("alice@roster.test")
            .with_role("escort"),
    );

    let response = app.request("GET", "/api/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("x-user-id"), Some("u-1"));
    assert_eq!(response.header("x-user-email"), Some("alice@roster.test"));
    assert_eq!(response.header("x-user-role"), Some("escort"));
    assert_eq!(response.body["data"]["user_id"], "u-1");
    assert_eq!(response.body["data"]["role"], "escort");
}

#[tokio::test]
async fn test_missing_claims_become_empty_headers() {
    let app = TestApp::new();
    let token = app.login("bare", Session::new("u-2"));

    let response = app.request("GET", "/api/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("x-user-id"), Some("u-2"));
    assert_eq!(response.header("x-user-email"), Some(""));
    assert_eq!(response.header("x-user-role"), Some(""));
    assert_eq!(response.body["data"]["email"], "");
}

#[tokio::test]
async fn test_bearer_header_is_accepted() {
    let app = TestApp::new();
    app.login("bearer-token", Session::new("u-3"));

    let response = app
        .request_with_headers(
            "GET",
            "/api/me",
            None,
            None,
            &[("authorization", "Bearer bearer-token")],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("x-user-id"), Some("u-3"));
}

#[tokio::test]
async fn test_client_supplied_identity_headers_are_replaced() {
    let app = TestApp::new();
    let token = app.login("alice", Session::new("u-1").with_email("alice@roster.test"));

    let response = app
        .request_with_headers(
            "GET",
            "/api/me",
            None,
            Some(&token),
            &[("x-user-id", "mallory"), ("x-user-role", "admin")],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["user_id"], "u-1");
    assert_eq!(response.body["data"]["role"], "");
}

#[tokio::test]
async fn test_spoofed_headers_do_not_survive_on_exempt_paths() {
    let app = TestApp::new();

    let response = app
        .request_with_headers("GET", "/", None, None, &[("x-user-id", "mallory")])
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.header("x-user-id").is_none());
}

#[tokio::test]
async fn test_static_assets_bypass_the_gate() {
    let app = TestApp::new();

    for path in ["/favicon.ico", "/_next/static/chunks/main.js", "/_next/image"] {
        let response = app.request("GET", path, None, None).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{path}");
        assert!(response.header("location").is_none(), "{path}");
    }
}

#[tokio::test]
async fn test_repeated_requests_get_the_same_decision() {
    let app = TestApp::new();
    let token = app.login("alice", Session::new("u-1"));

    let first = app.request("GET", "/api/me", None, Some(&token)).await;
    let second = app.request("GET", "/api/me", None, Some(&token)).await;
    assert_eq!(first.status, second.status);
    assert_eq!(first.header("x-user-id"), second.header("x-user-id"));

    let first = app.request("GET", "/profile/9", None, None).await;
    let second = app.request("GET", "/profile/9", None, None).await;
    assert_eq!(first.status, second.status);
    assert_eq!(first.header("location"), second.header("location"));
}

#[tokio::test]
async fn test_revoked_session_is_redirected() {
    let app = TestApp::new();
    let token = app.login("alice", Session::new("u-1"));

    let response = app.request("GET", "/api/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);

    app.sessions.revoke(&token);
    let response = app.request("GET", "/api/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn test_admin_route_requires_claim() {
    let app = TestApp::new();
    let token = app.login("member", Session::new("u-1").with_email(ADMIN_EMAIL));

    let response = app
        .request("GET", "/api/admin/overview", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), Some("/"));
}

#[tokio::test]
async fn test_admin_route_rechecks_email() {
    let app = TestApp::new();
    let token = app.login(
        "claimed",
        Session::new("u-2")
            .with_email("someone@roster.test")
            .with_admin(true),
    );

    let response = app
        .request("GET", "/api/admin/overview", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "FORBIDDEN");
}

#[tokio::test]
async fn test_admin_overview() {
    let app = TestApp::new();
    let token = app.login(
        "boss",
        Session::new("a-1").with_email(ADMIN_EMAIL).with_admin(true),
    );

    let response = app
        .request("GET", "/api/admin/overview", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["admin_id"], "a-1");
    assert_eq!(response.body["data"]["identity_provider"], "memory");
    assert_eq!(response.body["data"]["scheduled_window_hours"], 8);
}

#[tokio::test]
async fn test_custom_allow_list_from_config() {
    let mut config = roster_core::config::AppConfig::default();
    config.gate.exempt_paths = vec!["/api/health".to_string()];
    let app = TestApp::with_config(config);

    let response = app.request("GET", "/", None, None).await;
    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);

    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_admin_email_must_match_exactly() {
    let app = TestApp::new();
    let token = app.login(
        "shouting",
        Session::new("a-2")
            .with_email(ADMIN_EMAIL.to_uppercase())
            .with_admin(true),
    );

    let response = app
        .request("GET", "/api/admin/overview", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
