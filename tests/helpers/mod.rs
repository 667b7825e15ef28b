#![allow(dead_code)]

use quotebook::kv::KvStore;
use quotebook::store::types::{now_timestamp, Quote, Reflection};
use quotebook::store::{quotes, reflections};

/// Open a fresh in-memory store.
pub fn test_store() -> KvStore {
    KvStore::open_in_memory().unwrap()
}

/// Build a quote with a fixed id and a fresh timestamp.
pub fn quote(id: &str, text: &str) -> Quote {
    Quote {
        id: id.to_string(),
        text: text.to_string(),
        created_at: now_timestamp(),
    }
}

/// Build a reflection with a fixed id and a fresh timestamp.
pub fn reflection(id: &str, quote_id: &str, text: &str) -> Reflection {
    Reflection {
        id: id.to_string(),
        quote_id: quote_id.to_string(),
        text: text.to_string(),
        created_at: now_timestamp(),
    }
}

/// Insert a quote and return its id.
pub fn insert_quote(kv: &KvStore, id: &str, text: &str) -> String {
    assert!(quotes::create(kv, quote(id, text)));
    id.to_string()
}

/// Insert a reflection and return its id.
pub fn insert_reflection(kv: &KvStore, id: &str, quote_id: &str, text: &str) -> String {
    assert!(reflections::create(kv, reflection(id, quote_id, text)));
    id.to_string()
}
