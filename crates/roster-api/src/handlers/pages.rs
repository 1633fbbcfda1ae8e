//! Public pages on the gate's allow-list.

use axum::Json;
use axum::extract::Query;
use axum::http::Uri;

use roster_core::error::AppError;

use crate::dto::request::LoginPageQuery;
use crate::dto::response::{ApiResponse, PageResponse};
use crate::error::ApiError;

/// GET /
pub async fn home() -> Json<ApiResponse<PageResponse>> {
    Json(ApiResponse::ok(PageResponse {
        page: "home".to_string(),
        error: None,
    }))
}

/// GET /auth/login
///
/// Echoes the `error` code the gate attached to the redirect.
pub async fn login(Query(query): Query<LoginPageQuery>) -> Json<ApiResponse<PageResponse>> {
    Json(ApiResponse::ok(PageResponse {
        page: "login".to_string(),
        error: query.error,
    }))
}

/// Fallback for unknown paths. Mounted so the gate also runs on them.
pub async fn not_found(uri: Uri) -> ApiError {
    AppError::not_found(format!("No route for {}", uri.path())).into()
}
