//! Read-only aggregate over the three collections.

use serde::Serialize;

use crate::kv::KvStore;
use crate::store::keys;

/// Counts and credential presence. Pure read; never fails.
#[derive(Debug, Serialize)]
pub struct StoreStats {
    pub quotes: usize,
    pub favorites: usize,
    pub reflections: usize,
    pub credential_configured: bool,
}

/// Compute store statistics from freshly read state.
pub fn store_stats(kv: &KvStore) -> StoreStats {
    StoreStats {
        quotes: super::quotes::get_all(kv).len(),
        favorites: super::favorites::list(kv).len(),
        reflections: super::reflections::get_all(kv).len(),
        credential_configured: kv.exists(keys::CREDENTIAL),
    }
}
