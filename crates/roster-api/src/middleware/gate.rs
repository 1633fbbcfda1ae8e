//! Access-control gate middleware.
//!
//! Runs once per request before routing:
//!
//! 1. client-supplied `x-user-*` headers are stripped;
//! 2. bypassed paths (static assets) go straight to the handler;
//! 3. otherwise the [`SessionAuthority`](roster_auth::SessionAuthority)
//!    decides between a redirect and forwarding, and a forwarded identity is
//!    written to both the request and the response.
//!
//! No header is written until the session lookup has finished. If the client
//! goes away mid-lookup, the future is dropped and nothing else happens.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use tracing::debug;

use roster_auth::authority::Outcome;
use roster_auth::identity::PropagatedIdentity;

use crate::state::AppState;

/// The gate itself, mounted with `axum::middleware::from_fn_with_state`.
pub async fn session_gate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    PropagatedIdentity::clear(request.headers_mut());

    if state.bypass.matches(request.uri().path()) {
        return next.run(request).await;
    }

    let outcome = state.authority.authorize_request(&request).await;

    match outcome {
        Outcome::Forward(None) => next.run(request).await,
        Outcome::Forward(Some(identity)) => {
            identity.apply_to(request.headers_mut());
            let mut response = next.run(request).await;
            identity.apply_to(response.headers_mut());
            response
        }
        Outcome::Redirect(redirect) => {
            debug!(
                location = %redirect.location,
                reason = redirect.reason.as_str(),
                "Gate redirect"
            );
            Redirect::temporary(&redirect.location).into_response()
        }
    }
}
