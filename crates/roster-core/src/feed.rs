//! Discovery-feed projection: tags each listing with its online status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::availability::is_online_raw;

/// A profile as supplied by the feed collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileListing {
    /// Profile identifier.
    pub id: String,
    /// Public handle.
    #[serde(default)]
    pub username: Option<String>,
    /// Stored window start, as text.
    #[serde(default)]
    pub availability: Option<String>,
    /// Stored window end, as text.
    #[serde(default)]
    pub availability_exp: Option<String>,
}

/// A listing after online-status evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    /// Profile identifier.
    pub id: String,
    /// Public handle.
    pub username: Option<String>,
    /// Whether the profile is inside its availability window.
    pub online: bool,
}

/// Evaluates every listing against `now`, preserving input order.
pub fn annotate(listings: &[ProfileListing], now: DateTime<Utc>) -> Vec<FeedEntry> {
    listings
        .iter()
        .map(|listing| FeedEntry {
            id: listing.id.clone(),
            username: listing.username.clone(),
            online: is_online_raw(
                listing.availability.as_deref(),
                listing.availability_exp.as_deref(),
                now,
            ),
        })
        .collect()
}

/// Keeps only the listings that are online at `now`.
pub fn online_only(listings: &[ProfileListing], now: DateTime<Utc>) -> Vec<FeedEntry> {
    annotate(listings, now)
        .into_iter()
        .filter(|entry| entry.online)
        .collect()
}
