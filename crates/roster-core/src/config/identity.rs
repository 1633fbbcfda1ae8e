//! Identity provider configuration.

use serde::{Deserialize, Serialize};

/// Which session store backs the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityProviderKind {
    /// In-process token map. Development and tests only.
    Memory,
    /// Hosted identity provider reached over HTTP.
    Http,
}

impl Default for IdentityProviderKind {
    fn default() -> Self {
        Self::Memory
    }
}

impl std::fmt::Display for IdentityProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentityProviderKind::Memory => write!(f, "memory"),
            IdentityProviderKind::Http => write!(f, "http"),
        }
    }
}

/// Session store / identity provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Backing provider.
    #[serde(default)]
    pub provider: IdentityProviderKind,
    /// Base URL of the hosted identity provider.
    #[serde(default)]
    pub base_url: String,
    /// Public API key sent alongside every lookup.
    #[serde(default)]
    pub api_key: String,
    /// Name of the cookie carrying the access token.
    #[serde(default = "default_access_cookie")]
    pub access_cookie: String,
    /// Upper bound for a single session lookup, in milliseconds.
    #[serde(default = "default_lookup_timeout")]
    pub lookup_timeout_ms: u64,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            provider: IdentityProviderKind::default(),
            base_url: String::new(),
            api_key: String::new(),
            access_cookie: default_access_cookie(),
            lookup_timeout_ms: default_lookup_timeout(),
        }
    }
}

fn default_access_cookie() -> String {
    "sb-access-token".to_string()
}

fn default_lookup_timeout() -> u64 {
    3000
}
