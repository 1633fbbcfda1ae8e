//! Custom Axum extractors.

pub mod admin;
pub mod identity;

pub use admin::AdminUser;
pub use identity::Identity;
