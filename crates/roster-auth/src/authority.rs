//! Session authority: decides, per request, whether to forward or redirect.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderMap, Request};
use tracing::{debug, warn};

use roster_core::config::{GateConfig, IdentityConfig};
use roster_core::error::AppError;
use roster_core::result::AppResult;

use crate::credentials::Credentials;
use crate::identity::PropagatedIdentity;
use crate::route::{RouteClass, RouteClassifier};
use crate::session::{Session, SessionStore};

/// Why a request was redirected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RedirectReason {
    /// No credentials, or the provider did not recognize them.
    NoSession,
    /// The provider lookup failed or timed out.
    LookupFailed,
    /// Authenticated, but the route needs the admin claim.
    NotAdmin,
}

impl RedirectReason {
    /// Reason code appended as `?error=` to the redirect target, if any.
    pub fn query_code(&self) -> Option<&'static str> {
        match self {
            Self::NoSession | Self::NotAdmin => None,
            Self::LookupFailed => Some("session_unavailable"),
        }
    }

    /// Short name for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoSession => "no_session",
            Self::LookupFailed => "lookup_failed",
            Self::NotAdmin => "not_admin",
        }
    }
}

/// A redirect decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    /// Target for the `Location` header.
    pub location: String,
    /// Why the request was turned away.
    pub reason: RedirectReason,
}

impl Redirect {
    fn to(path: &str, reason: RedirectReason) -> Self {
        let location = match reason.query_code() {
            Some(code) => format!("{path}?error={code}"),
            None => path.to_string(),
        };
        Self { location, reason }
    }
}

/// The gate's verdict for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Continue to the handler. `Some` carries the identity to write into
    /// the forwarded request and the response; `None` passes the request
    /// through unmodified.
    Forward(Option<PropagatedIdentity>),
    /// Answer with a redirect instead of calling the handler.
    Redirect(Redirect),
}

/// Per-request access decision over an immutable allow-list and a session store.
#[derive(Debug, Clone)]
pub struct SessionAuthority {
    classifier: RouteClassifier,
    store: Arc<dyn SessionStore>,
    login_path: String,
    admin_prefix: String,
    admin_redirect: String,
    access_cookie: String,
    lookup_timeout: Duration,
}

impl SessionAuthority {
    /// Builds the authority from configuration and a session store.
    pub fn new(gate: &GateConfig, identity: &IdentityConfig, store: Arc<dyn SessionStore>) -> Self {
        Self {
            classifier: RouteClassifier::from_config(gate),
            store,
            login_path: gate.login_path.clone(),
            admin_prefix: gate.admin_prefix.clone(),
            admin_redirect: gate.admin_redirect.clone(),
            access_cookie: identity.access_cookie.clone(),
            lookup_timeout: Duration::from_millis(identity.lookup_timeout_ms),
        }
    }

    /// Replaces the classifier (e.g. a test allow-list).
    pub fn with_classifier(mut self, classifier: RouteClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// The path classifier in use.
    pub fn classifier(&self) -> &RouteClassifier {
        &self.classifier
    }

    /// Extracts credentials using the configured cookie name.
    pub fn credentials_from(&self, headers: &HeaderMap) -> Credentials {
        Credentials::from_headers(headers, &self.access_cookie)
    }

    /// Resolves the session behind `credentials`, bounded by the lookup timeout.
    ///
    /// Exactly one store call is made; nothing is retried.
    pub async fn resolve_session(&self, credentials: &Credentials) -> AppResult<Option<Session>> {
        if !credentials.is_present() {
            return Ok(None);
        }

        match tokio::time::timeout(self.lookup_timeout, self.store.get_session(credentials)).await
        {
            Ok(result) => result,
            Err(_) => Err(AppError::timeout(format!(
                "Session lookup exceeded {}ms",
                self.lookup_timeout.as_millis()
            ))),
        }
    }

    /// Decides the outcome for `path` with the given credentials.
    pub async fn authorize(&self, path: &str, credentials: &Credentials) -> Outcome {
        if self.classifier.classify(path) == RouteClass::Exempt {
            debug!(path, "Exempt path, passing through");
            return Outcome::Forward(None);
        }

        let session = match self.resolve_session(credentials).await {
            Ok(Some(session)) => session,
            Ok(None) => {
                debug!(path, "No session, redirecting to login");
                return Outcome::Redirect(Redirect::to(&self.login_path, RedirectReason::NoSession));
            }
            Err(e) => {
                warn!(path, error = %e, "Session lookup failed, redirecting to login");
                return Outcome::Redirect(Redirect::to(
                    &self.login_path,
                    RedirectReason::LookupFailed,
                ));
            }
        };

        if self.is_admin_path(path) && !session.is_admin {
            debug!(path, user_id = %session.user_id, "Admin route without admin claim");
            return Outcome::Redirect(Redirect::to(
                &self.admin_redirect,
                RedirectReason::NotAdmin,
            ));
        }

        Outcome::Forward(Some(PropagatedIdentity::from(&session)))
    }

    /// Same as [`SessionAuthority::authorize`] for a whole request. Path and
    /// credentials are copied out before the lookup starts.
    pub fn authorize_request<B>(
        &self,
        request: &Request<B>,
    ) -> impl Future<Output = Outcome> + Send + '_ {
        let path = request.uri().path().to_string();
        let credentials = self.credentials_from(request.headers());
        async move { self.authorize(&path, &credentials).await }
    }

    fn is_admin_path(&self, path: &str) -> bool {
        !self.admin_prefix.is_empty() && path.starts_with(self.admin_prefix.as_str())
    }
}
