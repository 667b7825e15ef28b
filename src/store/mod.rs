//! Entity store — the sole owner of the persisted collections.
//!
//! Three collections live under namespaced keys: quotes, the favorite set
//! (quote ids), and reflections. Every operation re-reads the collection from
//! the adapter, mutates, and writes back; nothing is cached between calls.
//! Mutations report a boolean outcome, propagating the adapter's containment
//! contract unchanged.

pub mod favorites;
pub mod quotes;
pub mod reflections;
pub mod snapshot;
pub mod stats;
pub mod types;

/// Namespaced storage keys. No other component writes these.
pub mod keys {
    pub const QUOTES: &str = "quotebook.quotes";
    pub const FAVORITES: &str = "quotebook.favorites";
    pub const REFLECTIONS: &str = "quotebook.reflections";
    pub const CREDENTIAL: &str = "quotebook.credential";

    /// Every key the application recognizes, for a full local reset.
    pub const ALL: &[&str] = &[QUOTES, FAVORITES, REFLECTIONS, CREDENTIAL];
}
