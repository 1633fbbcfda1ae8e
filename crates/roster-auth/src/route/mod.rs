//! Path classification for the access-control gate.

pub mod bypass;
pub mod classifier;

pub use bypass::BypassMatcher;
pub use classifier::{RouteClass, RouteClassifier};
