//! Availability windows and the online-status evaluator used by the
//! discovery feed.

pub mod evaluator;
pub mod window;

pub use evaluator::{is_online, is_online_raw, parse_timestamp};
pub use window::AvailabilityWindow;
