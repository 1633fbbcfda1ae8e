//! Current identity handler.

use axum::Json;

use roster_auth::identity::PropagatedIdentity;

use crate::dto::response::ApiResponse;
use crate::extractors::Identity;

/// GET /api/me
pub async fn me(Identity(identity): Identity) -> Json<ApiResponse<PropagatedIdentity>> {
    Json(ApiResponse::ok(identity))
}
