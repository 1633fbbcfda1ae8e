//! Exact-match allow-list classifier.

use std::collections::HashSet;
use std::sync::Arc;

use roster_core::config::GateConfig;

/// Whether a path needs a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteClass {
    /// Reachable without a session.
    Exempt,
    /// Requires a valid session.
    Protected,
}

/// Classifies request paths against a fixed allow-list.
///
/// Matching is exact string equality: `/auth/login/` and `/profiles/42`
/// are protected unless listed verbatim. The list is immutable once built.
#[derive(Debug, Clone)]
pub struct RouteClassifier {
    /// Paths that skip the session check.
    exempt: Arc<HashSet<String>>,
}

impl RouteClassifier {
    /// Creates a classifier from an explicit allow-list.
    pub fn new<I, S>(exempt_paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            exempt: Arc::new(exempt_paths.into_iter().map(Into::into).collect()),
        }
    }

    /// Creates a classifier from the gate configuration.
    pub fn from_config(config: &GateConfig) -> Self {
        Self::new(config.exempt_paths.iter().cloned())
    }

    /// Classifies a raw path (no query string).
    pub fn classify(&self, path: &str) -> RouteClass {
        if self.exempt.contains(path) {
            RouteClass::Exempt
        } else {
            RouteClass::Protected
        }
    }

    /// Shorthand for `classify(path) == RouteClass::Exempt`.
    pub fn is_exempt(&self, path: &str) -> bool {
        self.classify(path) == RouteClass::Exempt
    }

    /// Number of exempt paths.
    pub fn len(&self) -> usize {
        self.exempt.len()
    }

    /// Whether the allow-list is empty.
    pub fn is_empty(&self) -> bool {
        self.exempt.is_empty()
    }
}
