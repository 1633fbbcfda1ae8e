//! `AdminUser` extractor: re-verifies the session against the store.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use roster_auth::session::Session;

use crate::error::ApiError;
use crate::state::AppState;

/// A request whose session belongs to the configured administrator.
///
/// Does not look at the propagated `x-user-*` headers; the session is
/// fetched again from the identity provider.
#[derive(Debug, Clone)]
pub struct AdminUser(pub Session);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let credentials = state.authority.credentials_from(&parts.headers);
        let session = state
            .admin_policy
            .verify(&state.authority, &credentials)
            .await?;
        Ok(AdminUser(session))
    }
}
