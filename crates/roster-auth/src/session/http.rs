//! Session store backed by a hosted identity provider.
//!
//! Resolves an access token with `GET {base_url}/auth/v1/user`, sending the
//! project API key and the token as a bearer credential.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use roster_core::config::IdentityConfig;
use roster_core::error::{AppError, ErrorKind};
use roster_core::result::AppResult;

use crate::credentials::Credentials;

use super::model::Session;
use super::store::SessionStore;

/// User payload returned by the identity provider.
#[derive(Debug, Deserialize)]
struct ProviderUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    user_metadata: UserMetadata,
}

#[derive(Debug, Default, Deserialize)]
struct UserMetadata {
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    is_admin: bool,
}

impl From<ProviderUser> for Session {
    fn from(user: ProviderUser) -> Self {
        Session {
            user_id: user.id,
            email: user.email.filter(|e| !e.is_empty()),
            role: user.user_metadata.role.or(user.role),
            is_admin: user.user_metadata.is_admin,
        }
    }
}

/// HTTP client for the identity provider's user endpoint.
#[derive(Debug, Clone)]
pub struct HttpSessionStore {
    client: Client,
    user_url: String,
    api_key: String,
}

impl HttpSessionStore {
    /// Builds a store from configuration. The HTTP client carries the
    /// configured lookup timeout.
    pub fn new(config: &IdentityConfig) -> AppResult<Self> {
        let base = config.base_url.trim_end_matches('/');
        if base.is_empty() {
            return Err(AppError::configuration(
                "identity.base_url is required for the http provider",
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.lookup_timeout_ms))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to build identity client: {e}"),
                    e,
                )
            })?;

        Ok(Self {
            client,
            user_url: format!("{base}/auth/v1/user"),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl SessionStore for HttpSessionStore {
    async fn get_session(&self, credentials: &Credentials) -> AppResult<Option<Session>> {
        let Some(token) = credentials.access_token() else {
            return Ok(None);
        };

        let response = self
            .client
            .get(&self.user_url)
            .header("apikey", &self.api_key)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Identity provider request failed");
                if e.is_timeout() {
                    AppError::timeout(format!("Identity provider timed out: {e}"))
                } else {
                    AppError::external_service(format!("Identity provider unreachable: {e}"))
                }
            })?;

        match response.status() {
            status if status.is_success() => {
                let user: ProviderUser = response.json().await.map_err(|e| {
                    AppError::external_service(format!("Malformed identity payload: {e}"))
                })?;
                debug!(user_id = %user.id, "Resolved session from identity provider");
                Ok(Some(user.into()))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND => Ok(None),
            status => Err(AppError::external_service(format!(
                "Identity provider returned {status}"
            ))),
        }
    }
}
