//! # roster-api
//!
//! HTTP boundary for Roster built on Axum.
//!
//! Provides the access-control gate middleware, request logging, CORS,
//! identity extractors, handlers, DTOs, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
