//! # roster-auth
//!
//! Request-level access control for the Roster directory.
//!
//! ## Modules
//!
//! - `route`: exact-match path classification and static-asset bypass
//! - `credentials`: access-token extraction from cookies and headers
//! - `session`: session model and session stores (in-memory, hosted provider)
//! - `identity`: identity headers propagated to handlers and clients
//! - `authority`: the per-request Redirect/Forward decision
//! - `admin`: server-side administrator verification

pub mod admin;
pub mod authority;
pub mod credentials;
pub mod identity;
pub mod route;
pub mod session;

pub use admin::AdminPolicy;
pub use authority::{Outcome, Redirect, RedirectReason, SessionAuthority};
pub use credentials::Credentials;
pub use identity::PropagatedIdentity;
pub use route::{BypassMatcher, RouteClass, RouteClassifier};
pub use session::{HttpSessionStore, MemorySessionStore, Session, SessionStore};
