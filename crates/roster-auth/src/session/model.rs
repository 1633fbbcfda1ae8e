//! Session as reported by the identity provider.

use serde::{Deserialize, Serialize};

/// A resolved session. The gate only ever reads these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Stable user identifier.
    pub user_id: String,
    /// Email claim.
    #[serde(default)]
    pub email: Option<String>,
    /// Free-form role claim.
    #[serde(default)]
    pub role: Option<String>,
    /// Administrator flag from the user's metadata.
    #[serde(default)]
    pub is_admin: bool,
}

impl Session {
    /// Creates a session with only a user id.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: None,
            role: None,
            is_admin: false,
        }
    }

    /// Sets the email claim.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the role claim.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Sets the administrator flag.
    pub fn with_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }
}
