//! Core entity definitions.
//!
//! Defines [`Quote`] and [`Reflection`] (the two stored record types) and
//! their merge patches. Favorite status is not a field on [`Quote`] — it is
//! derived from membership in the favorite set, so the two can never drift.

use serde::{Deserialize, Serialize};

/// A stored quote, the primary entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// UUID v7 (time-sortable), assigned at creation, immutable.
    pub id: String,
    /// The quote body. Non-empty; validated by the caller before storage.
    pub text: String,
    /// ISO 8601 creation timestamp, immutable.
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// User-authored commentary linked to a quote by reference.
///
/// The reference may dangle: deleting a quote does not cascade to its
/// reflections, so an orphaned reflection stays retrievable on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reflection {
    /// UUID v7, immutable.
    pub id: String,
    /// Id of the quote this reflection comments on.
    #[serde(rename = "quoteId")]
    pub quote_id: String,
    /// The reflection body. Non-empty; validated by the caller.
    pub text: String,
    /// ISO 8601 creation timestamp, immutable.
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Merge patch for a quote. Only the fields present here can change; `id`
/// and `created_at` are structurally out of reach.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuotePatch {
    pub text: Option<String>,
}

/// Merge patch for a reflection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReflectionPatch {
    pub quote_id: Option<String>,
    pub text: Option<String>,
}

/// Generate a fresh entity id, unique across the lifetime of the store with
/// overwhelming probability.
pub fn new_id() -> String {
    uuid::Uuid::now_v7().to_string()
}

/// Current timestamp in the stored ISO 8601 form.
pub fn now_timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}
