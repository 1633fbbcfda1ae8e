//! Administrator verification.
//!
//! The admin check re-fetches the session from the store instead of
//! trusting the propagated identity headers.

use roster_core::config::AuthConfig;
use roster_core::error::AppError;
use roster_core::result::AppResult;

use crate::authority::SessionAuthority;
use crate::credentials::Credentials;
use crate::session::Session;

/// Compares a session's email against the configured administrator address.
///
/// Only surrounding whitespace in the configured value is ignored; the
/// session email must match it byte for byte.
#[derive(Debug, Clone, Default)]
pub struct AdminPolicy {
    admin_email: Option<String>,
}

impl AdminPolicy {
    /// Creates a policy. Blank addresses disable admin access.
    pub fn new(admin_email: Option<String>) -> Self {
        let admin_email = admin_email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());
        Self { admin_email }
    }

    /// Creates a policy from configuration.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.admin_email.clone())
    }

    /// Exact comparison with the administrator address.
    pub fn is_admin_email(&self, email: &str) -> bool {
        self.admin_email.as_deref() == Some(email)
    }

    /// Re-resolves the session behind `credentials` and checks it belongs to
    /// the administrator.
    pub async fn verify(
        &self,
        authority: &SessionAuthority,
        credentials: &Credentials,
    ) -> AppResult<Session> {
        let session = authority
            .resolve_session(credentials)
            .await?
            .ok_or_else(|| AppError::authentication("No active session"))?;

        let is_admin = session
            .email
            .as_deref()
            .is_some_and(|email| self.is_admin_email(email));

        if is_admin {
            Ok(session)
        } else {
            Err(AppError::authorization("Administrator access required"))
        }
    }
}
