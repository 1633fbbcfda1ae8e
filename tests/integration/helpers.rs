//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use tower::ServiceExt;

use roster_api::state::AppState;
use roster_auth::session::{MemorySessionStore, Session};
use roster_core::clock::FixedClock;
use roster_core::config::AppConfig;

/// Administrator address used by every test app.
pub const ADMIN_EMAIL: &str = "owner@roster.test";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Session store backing the gate; insert sessions to log users in
    pub sessions: MemorySessionStore,
    /// Instant the application clock is frozen at
    pub now: DateTime<Utc>,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application with default configuration
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a test application from an explicit configuration
    pub fn with_config(mut config: AppConfig) -> Self {
        config.auth.admin_email = Some(ADMIN_EMAIL.to_string());

        let now = fixed_now();
        let sessions = MemorySessionStore::new();
        let state = AppState::new(
            config.clone(),
            Arc::new(sessions.clone()),
            Arc::new(FixedClock::at(now)),
        );

        Self {
            router: roster_api::router::build_router(state),
            sessions,
            now,
            config,
        }
    }

    /// Register a session and return the token that unlocks it
    pub fn login(&self, token: &str, session: Session) -> String {
        self.sessions.insert(token, session);
        token.to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        self.request_with_headers(method, path, body, token, &[])
            .await
    }

    /// Make an HTTP request carrying extra headers
    pub async fn request_with_headers(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
        extra: &[(&str, &str)],
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(token) = token {
            let cookie = format!("{}={}", self.config.identity.access_cookie, token);
            req = req.header(header::COOKIE, cookie);
        }
        for (name, value) in extra {
            req = req.header(*name, *value);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// 2025-06-01T12:00:00Z
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// A response header as a string, if present
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
