//! Availability window handlers.

use axum::Json;
use axum::extract::State;
use tracing::info;
use validator::Validate;

use roster_core::availability::{AvailabilityWindow, parse_timestamp};
use roster_core::error::AppError;

use crate::dto::request::{GoOnlineRequest, ScheduleRequest};
use crate::dto::response::{ApiResponse, AvailabilityResponse};
use crate::error::ApiError;
use crate::extractors::Identity;
use crate::state::AppState;

/// POST /api/availability/schedule
///
/// Opens a window of `availability.scheduled_window_hours` from `start`.
pub async fn schedule(
    State(state): State<AppState>,
    Identity(identity): Identity,
    Json(req): Json<ScheduleRequest>,
) -> Result<Json<ApiResponse<AvailabilityResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let start = parse_timestamp(&req.start)
        .ok_or_else(|| AppError::validation(format!("Invalid start time: {}", req.start)))?;
    let window =
        AvailabilityWindow::scheduled(start, state.config.availability.scheduled_window_hours)?;

    info!(user_id = %identity.user_id, start = %start, "Availability scheduled");
    let body = respond(identity.user_id, window, &state)?;
    Ok(Json(ApiResponse::ok(body)))
}

/// POST /api/availability/now
pub async fn go_online(
    State(state): State<AppState>,
    Identity(identity): Identity,
    Json(req): Json<GoOnlineRequest>,
) -> Result<Json<ApiResponse<AvailabilityResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let window = AvailabilityWindow::starting_now(state.clock.now(), req.duration())?;

    info!(
        user_id = %identity.user_id,
        hours = req.hours,
        minutes = req.minutes,
        "Went online"
    );
    let body = respond(identity.user_id, window, &state)?;
    Ok(Json(ApiResponse::ok(body)))
}

fn respond(
    user_id: String,
    window: AvailabilityWindow,
    state: &AppState,
) -> Result<AvailabilityResponse, AppError> {
    let (Some(start), Some(end)) = (window.start, window.end) else {
        return Err(AppError::internal("Computed window is missing a bound"));
    };
    Ok(AvailabilityResponse {
        user_id,
        start,
        end,
        online: window.is_online(state.clock.now()),
    })
}
