//! Favorite set — the authoritative record of which quotes are favorites.
//!
//! Stored as an ordered sequence of quote ids with set semantics. Favorite
//! status is only ever derived from membership here; quotes carry no flag.

use crate::kv::KvStore;
use crate::store::keys;
use crate::store::types::Quote;

/// Add a quote id to the favorite set. Already-present ids are left alone —
/// set semantics, not a multiset.
pub fn add(kv: &KvStore, id: &str) -> bool {
    let mut ids = list(kv);
    if ids.iter().any(|existing| existing == id) {
        return true;
    }
    ids.push(id.to_string());
    kv.write(keys::FAVORITES, &ids)
}

/// Remove a quote id from the favorite set. Removing an absent id is a
/// success.
pub fn remove(kv: &KvStore, id: &str) -> bool {
    let mut ids = list(kv);
    let before = ids.len();
    ids.retain(|existing| existing != id);
    if ids.len() == before {
        return true;
    }
    kv.write(keys::FAVORITES, &ids)
}

/// Whether the given quote id is a favorite.
pub fn contains(kv: &KvStore, id: &str) -> bool {
    list(kv).iter().any(|existing| existing == id)
}

/// The raw favorite set, in insertion order.
pub fn list(kv: &KvStore) -> Vec<String> {
    kv.read(keys::FAVORITES, Vec::new())
}

/// The favorited quotes, in the quote collection's own order (newest first),
/// not favorite-insertion order. Filters against the live quote list, so an
/// id left dangling by a crash mid-delete is never returned.
pub fn resolve(kv: &KvStore) -> Vec<Quote> {
    let ids = list(kv);
    super::quotes::get_all(kv)
        .into_iter()
        .filter(|q| ids.iter().any(|id| *id == q.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::quotes;
    use crate::store::types::Quote;

    fn test_kv() -> KvStore {
        KvStore::open_in_memory().unwrap()
    }

    fn quote(id: &str) -> Quote {
        Quote {
            id: id.into(),
            text: format!("quote {id}"),
            created_at: crate::store::types::now_timestamp(),
        }
    }

    #[test]
    fn add_is_set_semantics() {
        let kv = test_kv();
        assert!(add(&kv, "a"));
        assert!(add(&kv, "a"));
        assert_eq!(list(&kv), vec!["a"]);
    }

    #[test]
    fn remove_is_idempotent() {
        let kv = test_kv();
        add(&kv, "a");
        assert!(remove(&kv, "a"));
        assert!(remove(&kv, "a"));
        assert!(list(&kv).is_empty());
    }

    #[test]
    fn contains_tracks_membership() {
        let kv = test_kv();
        assert!(!contains(&kv, "a"));
        add(&kv, "a");
        assert!(contains(&kv, "a"));
    }

    #[test]
    fn resolve_preserves_quote_order_not_favorite_order() {
        let kv = test_kv();
        quotes::create(&kv, quote("a"));
        quotes::create(&kv, quote("b"));
        quotes::create(&kv, quote("c"));

        // Favorite in the opposite of display order.
        add(&kv, "a");
        add(&kv, "c");

        let quotes = resolve(&kv);
        let ids: Vec<&str> = quotes.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a"]);
    }

    #[test]
    fn resolve_filters_dangling_ids() {
        let kv = test_kv();
        quotes::create(&kv, quote("a"));
        add(&kv, "a");
        add(&kv, "never-existed");

        let resolved = resolve(&kv);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id, "a");
    }
}
