//! Session store trait.

use async_trait::async_trait;

use roster_core::result::AppResult;

use crate::credentials::Credentials;

use super::model::Session;

/// Resolves request credentials into a session.
///
/// `Ok(None)` means the credentials are not (or no longer) valid. Errors are
/// reserved for provider failures; the gate treats both the same way.
#[async_trait]
pub trait SessionStore: Send + Sync + std::fmt::Debug + 'static {
    /// Looks up the session behind `credentials`.
    async fn get_session(&self, credentials: &Credentials) -> AppResult<Option<Session>>;
}
