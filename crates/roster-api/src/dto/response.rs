//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use roster_core::feed::FeedEntry;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Landing and login page payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse {
    /// Page name.
    pub page: String,
    /// Error code forwarded from the gate, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Annotated feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedResponse {
    /// Entries in request order.
    pub entries: Vec<FeedEntry>,
    /// Count of online entries.
    pub online: usize,
    /// Evaluation instant.
    pub evaluated_at: DateTime<Utc>,
}

/// A newly computed availability window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    /// Owner of the window.
    pub user_id: String,
    /// Window start.
    pub start: DateTime<Utc>,
    /// Window end, inclusive.
    pub end: DateTime<Utc>,
    /// Whether the window covers the current instant.
    pub online: bool,
}

/// Admin overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminOverviewResponse {
    /// Verified administrator id.
    pub admin_id: String,
    /// Number of exempt paths on the gate.
    pub exempt_paths: usize,
    /// Configured identity provider.
    pub identity_provider: String,
    /// Length of a scheduled window in hours.
    pub scheduled_window_hours: u32,
}
