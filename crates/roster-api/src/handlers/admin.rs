//! Admin-only handlers.

use axum::Json;
use axum::extract::State;
use tracing::info;

use crate::dto::response::{AdminOverviewResponse, ApiResponse};
use crate::extractors::AdminUser;
use crate::state::AppState;

/// GET /api/admin/overview
pub async fn overview(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
) -> Json<ApiResponse<AdminOverviewResponse>> {
    info!(admin_id = %admin.user_id, "Admin overview requested");

    Json(ApiResponse::ok(AdminOverviewResponse {
        admin_id: admin.user_id,
        exempt_paths: state.authority.classifier().len(),
        identity_provider: state.config.identity.provider.to_string(),
        scheduled_window_hours: state.config.availability.scheduled_window_hours,
    }))
}
