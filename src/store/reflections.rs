//! Reflection collection — commentary attached to quotes by reference.
//!
//! Same CRUD shape as quotes. Reflections are deliberately not cascade-deleted
//! when their quote goes away; an orphan stays retrievable via [`get_all`] and
//! is simply unmatched by [`list_for_quote`].

use crate::kv::KvStore;
use crate::store::keys;
use crate::store::types::{Reflection, ReflectionPatch};

/// Store a new reflection at the head of the collection (newest first).
pub fn create(kv: &KvStore, reflection: Reflection) -> bool {
    let mut all = get_all(kv);
    all.insert(0, reflection);
    kv.write(keys::REFLECTIONS, &all)
}

/// All reflections, newest first. Absent or corrupt storage reads as empty.
pub fn get_all(kv: &KvStore) -> Vec<Reflection> {
    kv.read(keys::REFLECTIONS, Vec::new())
}

/// Find a reflection by id.
pub fn get(kv: &KvStore, id: &str) -> Option<Reflection> {
    get_all(kv).into_iter().find(|r| r.id == id)
}

/// Merge-patch the reflection with the given id. Returns `false` if absent.
pub fn update(kv: &KvStore, id: &str, patch: &ReflectionPatch) -> bool {
    let mut all = get_all(kv);
    let Some(reflection) = all.iter_mut().find(|r| r.id == id) else {
        tracing::debug!(id, "update target not found");
        return false;
    };

    if let Some(quote_id) = &patch.quote_id {
        reflection.quote_id = quote_id.clone();
    }
    if let Some(text) = &patch.text {
        reflection.text = text.clone();
    }

    kv.write(keys::REFLECTIONS, &all)
}

/// Delete the reflection with the given id. Deleting an absent id is a
/// success.
pub fn delete(kv: &KvStore, id: &str) -> bool {
    let mut all = get_all(kv);
    let before = all.len();
    all.retain(|r| r.id != id);
    if all.len() == before {
        return true;
    }
    kv.write(keys::REFLECTIONS, &all)
}

/// The reflections attached to one live quote, in collection order. A
/// dangling reference (the quote was deleted) matches nothing: the lookup
/// returns empty even though the orphaned reflections remain in [`get_all`].
pub fn list_for_quote(kv: &KvStore, quote_id: &str) -> Vec<Reflection> {
    if super::quotes::get(kv, quote_id).is_none() {
        return Vec::new();
    }
    get_all(kv)
        .into_iter()
        .filter(|r| r.quote_id == quote_id)
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

    fn reflection(id: &str, quote_id: &str, text: &str) -> Reflection {
        Reflection {
            id: id.into(),
            quote_id: quote_id.into(),
            text: text.into(),
            created_at: crate::store::types::now_timestamp(),
        }
    }

    #[test]
    fn create_prepends_newest_first() {
        let kv = test_kv();
        create(&kv, reflection("r1", "q1", "one"));
        create(&kv, reflection("r2", "q1", "two"));

        let reflections = get_all(&kv);
        let ids: Vec<&str> = reflections.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r2", "r1"]);
    }

    fn seed_quote(kv: &KvStore, id: &str) {
        quotes::create(
            kv,
            Quote {
                id: id.into(),
                text: format!("quote {id}"),
                created_at: crate::store::types::now_timestamp(),
            },
        );
    }

    #[test]
    fn list_for_quote_filters_by_reference() {
        let kv = test_kv();
        seed_quote(&kv, "q1");
        seed_quote(&kv, "q2");
        create(&kv, reflection("r1", "q1", "on q1"));
        create(&kv, reflection("r2", "q2", "on q2"));
        create(&kv, reflection("r3", "q1", "also on q1"));

        let reflections = list_for_quote(&kv, "q1");
        let ids: Vec<&str> = reflections.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r3", "r1"]);
    }

    #[test]
    fn update_merges_only_supplied_fields() {
        let kv = test_kv();
        create(&kv, reflection("r1", "q1", "original"));
        let created_at = get(&kv, "r1").unwrap().created_at;

        let patch = ReflectionPatch {
            quote_id: None,
            text: Some("revised".into()),
        };
        assert!(update(&kv, "r1", &patch));

        let after = get(&kv, "r1").unwrap();
        assert_eq!(after.text, "revised");
        assert_eq!(after.quote_id, "q1");
        assert_eq!(after.created_at, created_at);
    }

    #[test]
    fn update_missing_id_fails() {
        let kv = test_kv();
        assert!(!update(&kv, "missing", &ReflectionPatch::default()));
    }

    #[test]
    fn delete_is_idempotent() {
        let kv = test_kv();
        create(&kv, reflection("r1", "q1", "text"));
        assert!(delete(&kv, "r1"));
        assert!(delete(&kv, "r1"));
        assert!(get_all(&kv).is_empty());
    }

    #[test]
    fn orphans_survive_quote_deletion_but_match_nothing() {
        let kv = test_kv();
        seed_quote(&kv, "q1");
        create(&kv, reflection("r1", "q1", "thoughts"));

        quotes::delete(&kv, "q1");

        // No cascade: the reflection is still there, just unmatched.
        assert_eq!(get_all(&kv).len(), 1);
        assert!(quotes::get(&kv, "q1").is_none());
        assert!(list_for_quote(&kv, "q1").is_empty());
    }
}
