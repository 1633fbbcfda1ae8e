//! Route definitions for the Roster HTTP API.
//!
//! Every route, including the fallback, sits behind the session gate.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(health_routes())
        .merge(identity_routes())
        .merge(feed_routes())
        .merge(availability_routes())
        .merge(admin_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(page_routes())
        .nest("/api", api_routes)
        .fallback(handlers::pages::not_found)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::gate::session_gate,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Public pages
fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::pages::home))
        .route("/auth/login", get(handlers::pages::login))
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Identity of the current session
fn identity_routes() -> Router<AppState> {
    Router::new().route("/me", get(handlers::me::me))
}

fn feed_routes() -> Router<AppState> {
    Router::new().route("/feed", post(handlers::feed::annotate_feed))
}

/// Availability windows: scheduled and immediate
fn availability_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/availability/schedule",
            post(handlers::availability::schedule),
        )
        .route("/availability/now", post(handlers::availability::go_online))
}

/// Admin endpoints (gate checks the claim, extractor re-verifies the email)
fn admin_routes() -> Router<AppState> {
    Router::new().route("/admin/overview", get(handlers::admin::overview))
}
