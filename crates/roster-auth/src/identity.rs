//! Identity headers written by the gate.
//!
//! These headers are a convenience cache for handlers and the client. They
//! are not proof of identity: anything security-sensitive must re-verify
//! the session against the store (see [`crate::admin::AdminPolicy`]).

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};

use crate::session::Session;

/// Header carrying the user id.
pub const USER_ID_HEADER: HeaderName = HeaderName::from_static("x-user-id");
/// Header carrying the email claim.
pub const USER_EMAIL_HEADER: HeaderName = HeaderName::from_static("x-user-email");
/// Header carrying the role claim.
pub const USER_ROLE_HEADER: HeaderName = HeaderName::from_static("x-user-role");

/// The (user id, email, role) triple copied from a session.
///
/// Absent claims are empty strings, never missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropagatedIdentity {
    /// Stable user identifier.
    pub user_id: String,
    /// Email claim or `""`.
    pub email: String,
    /// Role claim or `""`.
    pub role: String,
}

impl From<&Session> for PropagatedIdentity {
    fn from(session: &Session) -> Self {
        Self {
            user_id: session.user_id.clone(),
            email: session.email.clone().unwrap_or_default(),
            role: session.role.clone().unwrap_or_default(),
        }
    }
}

impl PropagatedIdentity {
    /// The three header name/value pairs.
    pub fn header_pairs(&self) -> [(HeaderName, &str); 3] {
        [
            (USER_ID_HEADER, self.user_id.as_str()),
            (USER_EMAIL_HEADER, self.email.as_str()),
            (USER_ROLE_HEADER, self.role.as_str()),
        ]
    }

    /// Writes the triple into `headers`, replacing previous values.
    pub fn apply_to(&self, headers: &mut HeaderMap) {
        for (name, value) in self.header_pairs() {
            headers.insert(name, header_value(value));
        }
    }

    /// Reads a triple back. Returns `None` without a user id header.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let read = |name: &HeaderName| {
            headers
                .get(name)
                .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        };

        let user_id = read(&USER_ID_HEADER).filter(|id| !id.is_empty())?;
        Some(Self {
            user_id,
            email: read(&USER_EMAIL_HEADER).unwrap_or_default(),
            role: read(&USER_ROLE_HEADER).unwrap_or_default(),
        })
    }

    /// Removes all identity headers, e.g. client-supplied ones.
    pub fn clear(headers: &mut HeaderMap) {
        headers.remove(USER_ID_HEADER);
        headers.remove(USER_EMAIL_HEADER);
        headers.remove(USER_ROLE_HEADER);
    }
}

/// Builds a header value that cannot fail: control characters are dropped.
fn header_value(raw: &str) -> HeaderValue {
    let cleaned: String = raw.chars().filter(|c| !c.is_control()).collect();
    HeaderValue::from_bytes(cleaned.as_bytes()).unwrap_or_else(|_| HeaderValue::from_static(""))
}
