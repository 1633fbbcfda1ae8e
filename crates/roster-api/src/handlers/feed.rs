//! Feed annotation handler.

use axum::Json;
use axum::extract::State;

use roster_core::feed;

use crate::dto::request::FeedRequest;
use crate::dto::response::{ApiResponse, FeedResponse};
use crate::state::AppState;

/// POST /api/feed
///
/// Marks each listing online or offline at a single instant read from the
/// clock, so every entry in one response is judged against the same `now`.
pub async fn annotate_feed(
    State(state): State<AppState>,
    Json(req): Json<FeedRequest>,
) -> Json<ApiResponse<FeedResponse>> {
    let now = state.clock.now();
    let entries = if req.online_only {
        feed::online_only(&req.profiles, now)
    } else {
        feed::annotate(&req.profiles, now)
    };
    let online = entries.iter().filter(|e| e.online).count();

    Json(ApiResponse::ok(FeedResponse {
        entries,
        online,
        evaluated_at: now,
    }))
}
