//! In-memory session store keyed by access token.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use roster_core::result::AppResult;

use crate::credentials::Credentials;

use super::model::Session;
use super::store::SessionStore;

/// Token → session map for development and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    sessions: Arc<DashMap<String, Session>>,
}

impl MemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `session` under `token`, replacing any previous entry.
    pub fn insert(&self, token: impl Into<String>, session: Session) {
        let token = token.into();
        debug!(user_id = %session.user_id, "Registered in-memory session");
        self.sessions.insert(token, session);
    }

    /// Removes the session behind `token`. Returns whether one existed.
    pub fn revoke(&self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }

    /// Number of registered sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no sessions are registered.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get_session(&self, credentials: &Credentials) -> AppResult<Option<Session>> {
        Ok(credentials
            .access_token()
            .and_then(|token| self.sessions.get(token).map(|entry| entry.value().clone())))
    }
}
