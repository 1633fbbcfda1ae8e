//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use roster_auth::admin::AdminPolicy;
use roster_auth::authority::SessionAuthority;
use roster_auth::route::BypassMatcher;
use roster_auth::session::SessionStore;
use roster_core::clock::Clock;
use roster_core::config::AppConfig;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Gate ─────────────────────────────────────────────────
    /// Per-request Redirect/Forward decision
    pub authority: Arc<SessionAuthority>,
    /// Static-asset paths that skip the gate
    pub bypass: BypassMatcher,
    /// Server-side administrator check
    pub admin_policy: Arc<AdminPolicy>,

    // ── Time ─────────────────────────────────────────────────
    /// Reference clock for availability evaluation
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Wires the state from configuration, a session store, and a clock.
    pub fn new(config: AppConfig, store: Arc<dyn SessionStore>, clock: Arc<dyn Clock>) -> Self {
        let authority = SessionAuthority::new(&config.gate, &config.identity, store);
        let bypass = BypassMatcher::from_config(&config.gate);
        let admin_policy = AdminPolicy::from_config(&config.auth);

        Self {
            config: Arc::new(config),
            authority: Arc::new(authority),
            bypass,
            admin_policy: Arc::new(admin_policy),
            clock,
        }
    }
}
