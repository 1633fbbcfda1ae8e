//! Static-asset bypass. Paths matched here never reach the gate.

use std::sync::Arc;

use roster_core::config::GateConfig;

/// Prefix matcher for paths the gate does not see at all.
#[derive(Debug, Clone, Default)]
pub struct BypassMatcher {
    prefixes: Arc<[String]>,
}

impl BypassMatcher {
    /// Creates a matcher from a list of prefixes. Empty prefixes are ignored.
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prefixes: Vec<String> = prefixes
            .into_iter()
            .map(Into::into)
            .filter(|p| !p.is_empty())
            .collect();
        Self {
            prefixes: prefixes.into(),
        }
    }

    /// Creates a matcher from the gate configuration.
    pub fn from_config(config: &GateConfig) -> Self {
        Self::new(config.bypass_prefixes.iter().cloned())
    }

    /// Whether `path` skips the gate.
    pub fn matches(&self, path: &str) -> bool {
        self.prefixes.iter().any(|prefix| path.starts_with(prefix.as_str()))
    }
}
