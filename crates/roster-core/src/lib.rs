//! # roster-core
//!
//! Core crate for the Roster directory. Contains configuration schemas,
//! the unified error system, the clock abstraction, availability-window
//! evaluation, and the discovery-feed projection.
//!
//! This crate has **no** internal dependencies on other Roster crates.

pub mod availability;
pub mod clock;
pub mod config;
pub mod error;
pub mod feed;
pub mod result;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::AppError;
pub use result::AppResult;
