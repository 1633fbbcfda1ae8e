//! Availability window value object.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

use super::evaluator::{is_online, parse_timestamp};

/// The interval during which a profile shows as online.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    /// Window start. `None` means the profile never set one.
    pub start: Option<DateTime<Utc>>,
    /// Window end.
    pub end: Option<DateTime<Utc>>,
}

impl AvailabilityWindow {
    /// Builds a window from stored strings; unparseable bounds become `None`.
    pub fn from_raw(start: Option<&str>, end: Option<&str>) -> Self {
        Self {
            start: start.and_then(parse_timestamp),
            end: end.and_then(parse_timestamp),
        }
    }

    /// A window opening at `start` and lasting `hours`.
    pub fn scheduled(start: DateTime<Utc>, hours: u32) -> AppResult<Self> {
        if hours == 0 {
            return Err(AppError::validation("Window length must be at least one hour"));
        }
        let end = start
            .checked_add_signed(Duration::hours(i64::from(hours)))
            .ok_or_else(|| AppError::validation("Window end is out of range"))?;
        Ok(Self {
            start: Some(start),
            end: Some(end),
        })
    }

    /// A window opening at `now` and lasting `duration`.
    pub fn starting_now(now: DateTime<Utc>, duration: Duration) -> AppResult<Self> {
        if duration <= Duration::zero() {
            return Err(AppError::validation("Duration must be greater than 0"));
        }
        let end = now
            .checked_add_signed(duration)
            .ok_or_else(|| AppError::validation("Window end is out of range"))?;
        Ok(Self {
            start: Some(now),
            end: Some(end),
        })
    }

    /// Whether the window contains `now`.
    pub fn is_online(&self, now: DateTime<Utc>) -> bool {
        is_online(self.start, self.end, now)
    }
}
