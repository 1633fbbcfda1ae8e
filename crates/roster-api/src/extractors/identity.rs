//! `Identity` extractor: reads the headers written by the gate.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use roster_auth::identity::PropagatedIdentity;
use roster_core::error::AppError;

use crate::error::ApiError;

/// The identity propagated by the gate for this request.
///
/// Good enough for personalization. Sensitive operations use
/// [`AdminUser`](super::AdminUser) or re-check the session store.
#[derive(Debug, Clone)]
pub struct Identity(pub PropagatedIdentity);

impl std::ops::Deref for Identity {
    type Target = PropagatedIdentity;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        PropagatedIdentity::from_headers(&parts.headers)
            .map(Identity)
            .ok_or_else(|| AppError::authentication("No identity on request").into())
    }
}
