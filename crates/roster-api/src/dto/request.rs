//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use roster_core::feed::ProfileListing;

/// Query string accepted by the login page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginPageQuery {
    /// Error code set by the gate, e.g. `session_unavailable`.
    pub error: Option<String>,
}

/// Feed annotation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedRequest {
    /// Listings in display order.
    pub profiles: Vec<ProfileListing>,
    /// Drop offline listings from the result.
    #[serde(default)]
    pub online_only: bool,
}

/// Schedule a fixed-length availability window.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScheduleRequest {
    /// Window start as an ISO-8601 timestamp.
    #[validate(length(min = 1, message = "Start time is required"))]
    pub start: String,
}

/// Go online from now for a given duration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GoOnlineRequest {
    /// Whole hours.
    #[serde(default)]
    #[validate(range(max = 168))]
    pub hours: u32,
    /// Additional minutes.
    #[serde(default)]
    #[validate(range(max = 59))]
    pub minutes: u32,
}

impl GoOnlineRequest {
    /// Total requested duration.
    pub fn duration(&self) -> chrono::Duration {
        chrono::Duration::hours(i64::from(self.hours))
            + chrono::Duration::minutes(i64::from(self.minutes))
    }
}
