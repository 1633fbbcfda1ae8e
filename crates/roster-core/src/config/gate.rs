//! Access-control gate configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the request-level access-control gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateConfig {
    /// Paths reachable without a session. Matched by exact string equality.
    #[serde(default = "default_exempt_paths")]
    pub exempt_paths: Vec<String>,
    /// Path prefixes that never reach the gate (static assets).
    #[serde(default = "default_bypass_prefixes")]
    pub bypass_prefixes: Vec<String>,
    /// Where unauthenticated requests are redirected.
    #[serde(default = "default_login_path")]
    pub login_path: String,
    /// Prefix of routes that additionally require the admin claim.
    #[serde(default = "default_admin_prefix")]
    pub admin_prefix: String,
    /// Where authenticated non-admins are sent when they hit an admin route.
    #[serde(default = "default_admin_redirect")]
    pub admin_redirect: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            exempt_paths: default_exempt_paths(),
            bypass_prefixes: default_bypass_prefixes(),
            login_path: default_login_path(),
            admin_prefix: default_admin_prefix(),
            admin_redirect: default_admin_redirect(),
        }
    }
}

fn default_exempt_paths() -> Vec<String> {
    vec![
        "/".to_string(),
        "/auth/login".to_string(),
        "/auth/signup".to_string(),
        "/api/auth/signup".to_string(),
        "/api/auth/resetPassword".to_string(),
        "/api/health".to_string(),
    ]
}

fn default_bypass_prefixes() -> Vec<String> {
    vec![
        "/_next/static".to_string(),
        "/_next/image".to_string(),
        "/favicon.ico".to_string(),
    ]
}

fn default_login_path() -> String {
    "/auth/login".to_string()
}

fn default_admin_prefix() -> String {
    "/api/admin/".to_string()
}

fn default_admin_redirect() -> String {
    "/".to_string()
}
