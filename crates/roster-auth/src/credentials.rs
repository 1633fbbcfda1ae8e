//! Request credentials: the access token carried by a cookie or bearer header.

use std::fmt;

use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum_extra::extract::cookie::CookieJar;

/// The credential material presented with a request.
///
/// The token is opaque to the gate; only the session store interprets it.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    access_token: Option<String>,
}

impl Credentials {
    /// No credentials.
    pub fn none() -> Self {
        Self::default()
    }

    /// Credentials holding `token`. Blank tokens count as absent.
    pub fn bearer(token: impl Into<String>) -> Self {
        let token = token.into();
        let token = token.trim();
        Self {
            access_token: (!token.is_empty()).then(|| token.to_string()),
        }
    }

    /// Reads the access token from the named cookie, falling back to an
    /// `Authorization: Bearer` header.
    pub fn from_headers(headers: &HeaderMap, cookie_name: &str) -> Self {
        let jar = CookieJar::from_headers(headers);
        if let Some(cookie) = jar.get(cookie_name) {
            let from_cookie = Self::bearer(cookie.value());
            if from_cookie.is_present() {
                return from_cookie;
            }
        }

        headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(Self::bearer)
            .unwrap_or_default()
    }

    /// The raw access token, if any.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Whether a token was supplied.
    pub fn is_present(&self) -> bool {
        self.access_token.is_some()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}
