//! CLI command implementations — the application controller.
//!
//! Each command opens the store, drives the entity-store operations, and
//! re-reads state for display. Input validation (non-empty text, credential
//! shape, quote-exists checks) lives here, not in the store.

pub mod credential;
pub mod export;
pub mod favorites;
pub mod generate;
pub mod import;
pub mod quotes;
pub mod reflections;
pub mod reset;
pub mod stats;

use anyhow::Result;

use crate::config::QuotebookConfig;
use crate::kv::KvStore;

/// Open the configured store.
pub(crate) fn open_store(config: &QuotebookConfig) -> Result<KvStore> {
    KvStore::open(config.resolved_store_path())
}

/// One-line display form of a quote: favorite marker, short id, text.
pub(crate) fn format_quote(quote: &crate::store::types::Quote, favorite: bool) -> String {
    let marker = if favorite { "*" } else { " " };
    format!("{marker} [{}] {}", short_id(&quote.id), quote.text)
}

/// First id segment — enough to disambiguate interactively.
pub(crate) fn short_id(id: &str) -> &str {
    id.split('-').next().unwrap_or(id)
}

/// Resolve a possibly-shortened id against a collection of full ids. Exact
/// matches win; otherwise a unique prefix match is accepted.
pub(crate) fn resolve_id<'a>(
    candidates: impl Iterator<Item = &'a str>,
    given: &str,
) -> Option<String> {
    let mut matches: Vec<&str> = Vec::new();
    for id in candidates {
        if id == given {
            return Some(id.to_string());
        }
        if id.starts_with(given) {
            matches.push(id);
        }
    }
    match matches.as_slice() {
        [only] => Some((*only).to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_id_takes_first_segment() {
        assert_eq!(short_id("0192d3a0-aaaa-bbbb-cccc-111111111111"), "0192d3a0");
        assert_eq!(short_id("plain"), "plain");
    }

    #[test]
    fn resolve_id_prefers_exact_match() {
        let ids = ["abc-1", "abc-12"];
        let resolved = resolve_id(ids.iter().copied(), "abc-1");
        assert_eq!(resolved.as_deref(), Some("abc-1"));
    }

    #[test]
    fn resolve_id_accepts_unique_prefix() {
        let ids = ["abc-1", "xyz-2"];
        let resolved = resolve_id(ids.iter().copied(), "xyz");
        assert_eq!(resolved.as_deref(), Some("xyz-2"));
    }

    #[test]
    fn resolve_id_rejects_ambiguous_prefix() {
        let ids = ["abc-1", "abc-2"];
        assert!(resolve_id(ids.iter().copied(), "abc").is_none());
    }
}
