//! Availability window configuration.

use serde::{Deserialize, Serialize};

/// Availability window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityConfig {
    /// Length of a window opened from a scheduled start time, in hours.
    #[serde(default = "default_scheduled_window_hours")]
    pub scheduled_window_hours: u32,
}

impl Default for AvailabilityConfig {
    fn default() -> Self {
        Self {
            scheduled_window_hours: default_scheduled_window_hours(),
        }
    }
}

fn default_scheduled_window_hours() -> u32 {
    8
}
