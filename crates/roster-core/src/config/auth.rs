//! Administrator configuration.

use serde::{Deserialize, Serialize};

/// Administrator identification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Email address of the site administrator. `None` disables admin access.
    #[serde(default)]
    pub admin_email: Option<String>,
}
