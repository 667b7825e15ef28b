//! Snapshot export and import for backup/restore.
//!
//! A snapshot carries all three collections. On import, each key present in
//! the input wholly replaces the corresponding stored collection. The three
//! collections are imported independently, not as one transaction: a
//! collection that fails to parse (or write) is reported as a failure while
//! the ones that succeeded stay applied.

use serde::Serialize;
use serde_json::Value;

use crate::kv::KvStore;
use crate::store::keys;
use crate::store::types::{Quote, Reflection};

/// Full snapshot of the store's collections.
#[derive(Debug, Serialize)]
pub struct Snapshot {
    pub quotes: Vec<Quote>,
    pub favorites: Vec<String>,
    pub reflections: Vec<Reflection>,
}

/// Read all three collections into a snapshot.
pub fn export_snapshot(kv: &KvStore) -> Snapshot {
    Snapshot {
        quotes: super::quotes::get_all(kv),
        favorites: super::favorites::list(kv),
        reflections: super::reflections::get_all(kv),
    }
}

/// Import a snapshot. Each of `quotes`, `favorites`, and `reflections`
/// present in `data` replaces the stored collection. Returns `false` if any
/// present collection failed to parse or write; collections that succeeded
/// are left in place.
pub fn import_snapshot(kv: &KvStore, data: &Value) -> bool {
    let mut ok = true;

    ok &= import_collection::<Vec<Quote>>(kv, data, "quotes", keys::QUOTES);
    ok &= import_collection::<Vec<String>>(kv, data, "favorites", keys::FAVORITES);
    ok &= import_collection::<Vec<Reflection>>(kv, data, "reflections", keys::REFLECTIONS);

    ok
}

/// Parse one collection out of the snapshot and write it whole. An absent
/// field is a success (nothing to replace).
fn import_collection<T>(kv: &KvStore, data: &Value, field: &str, key: &str) -> bool
where
    T: serde::de::DeserializeOwned + Serialize,
{
    let Some(raw) = data.get(field) else {
        return true;
    };

    match serde_json::from_value::<T>(raw.clone()) {
        Ok(collection) => kv.write(key, &collection),
        Err(e) => {
            tracing::warn!(field, error = %e, "snapshot collection failed to parse");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::types::now_timestamp;
    use crate::store::{favorites, quotes, reflections};

    fn test_kv() -> KvStore {
        KvStore::open_in_memory().unwrap()
    }

    fn seed(kv: &KvStore) {
        quotes::create(
            kv,
            Quote {
                id: "q1".into(),
                text: "Be kind.".into(),
                created_at: now_timestamp(),
            },
        );
        favorites::add(kv, "q1");
        reflections::create(
            kv,
            Reflection {
                id: "r1".into(),
                quote_id: "q1".into(),
                text: "a thought".into(),
                created_at: now_timestamp(),
            },
        );
    }

    #[test]
    fn export_then_import_roundtrips() {
        let source = test_kv();
        seed(&source);
        let snapshot = export_snapshot(&source);
        let json = serde_json::to_value(&snapshot).unwrap();

        let target = test_kv();
        assert!(import_snapshot(&target, &json));

        assert_eq!(quotes::get_all(&target), quotes::get_all(&source));
        assert_eq!(favorites::list(&target), favorites::list(&source));
        assert_eq!(reflections::get_all(&target), reflections::get_all(&source));
    }

    #[test]
    fn import_wholly_replaces_present_collections() {
        let kv = test_kv();
        seed(&kv);

        let json = serde_json::json!({
            "quotes": [
                {"id": "q9", "text": "Replacement.", "createdAt": "2026-01-01T00:00:00+00:00"}
            ]
        });
        assert!(import_snapshot(&kv, &json));

        let all = quotes::get_all(&kv);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, "q9");
        // Collections absent from the input are untouched.
        assert_eq!(favorites::list(&kv), vec!["q1"]);
        assert_eq!(reflections::get_all(&kv).len(), 1);
    }

    #[test]
    fn partial_import_surfaces_failure_but_keeps_successes() {
        let kv = test_kv();

        let json = serde_json::json!({
            "quotes": [
                {"id": "q2", "text": "Good.", "createdAt": "2026-01-01T00:00:00+00:00"}
            ],
            "reflections": "this is not a sequence"
        });
        assert!(!import_snapshot(&kv, &json));

        // Quotes were applied before reflections failed.
        assert_eq!(quotes::get_all(&kv).len(), 1);
        assert!(reflections::get_all(&kv).is_empty());
    }

    #[test]
    fn import_accepts_legacy_quotes_with_favorite_flag() {
        let kv = test_kv();

        let json = serde_json::json!({
            "quotes": [
                {"id": "q1", "text": "Old export.", "createdAt": "2025-06-01T00:00:00+00:00", "isFavorite": true}
            ],
            "favorites": ["q1"]
        });
        assert!(import_snapshot(&kv, &json));
        assert_eq!(quotes::get_all(&kv).len(), 1);
        assert!(favorites::contains(&kv, "q1"));
    }
}
