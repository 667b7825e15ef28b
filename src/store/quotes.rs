//! Quote collection — create, read, merge-patch, delete.
//!
//! Deleting a quote also scrubs its id from the favorite set. The two writes
//! are sequential, not atomic; [`favorites::resolve`](super::favorites::resolve)
//! tolerates a dangling favorite id left by a crash between them.

use crate::kv::KvStore;
use crate::store::keys;
use crate::store::types::{Quote, QuotePatch};

/// Store a new quote at the head of the collection (newest first). The caller
/// supplies the id and creation timestamp.
pub fn create(kv: &KvStore, quote: Quote) -> bool {
    let mut all = get_all(kv);
    all.insert(0, quote);
    kv.write(keys::QUOTES, &all)
}

/// All quotes, newest first. Absent or corrupt storage reads as empty.
pub fn get_all(kv: &KvStore) -> Vec<Quote> {
    kv.read(keys::QUOTES, Vec::new())
}

/// Find a quote by id.
pub fn get(kv: &KvStore, id: &str) -> Option<Quote> {
    get_all(kv).into_iter().find(|q| q.id == id)
}

/// Merge-patch the quote with the given id. Fields absent from the patch keep
/// their stored value; `id` and `created_at` are never touched. Returns
/// `false` if no quote has that id — the caller expected it to exist.
pub fn update(kv: &KvStore, id: &str, patch: &QuotePatch) -> bool {
    let mut all = get_all(kv);
    let Some(quote) = all.iter_mut().find(|q| q.id == id) else {
        tracing::debug!(id, "update target not found");
        return false;
    };

    if let Some(text) = &patch.text {
        quote.text = text.clone();
    }

    kv.write(keys::QUOTES, &all)
}

/// Delete the quote with the given id and remove it from the favorite set in
/// the same logical operation. Deleting an absent id is a success.
pub fn delete(kv: &KvStore, id: &str) -> bool {
    let mut all = get_all(kv);
    let before = all.len();
    all.retain(|q| q.id != id);

    if all.len() == before {
        // Absent — idempotent no-op, but still scrub the favorite set in case
        // a prior delete crashed between the two writes.
        return super::favorites::remove(kv, id);
    }

    let wrote = kv.write(keys::QUOTES, &all);
    let scrubbed = super::favorites::remove(kv, id);
    wrote && scrubbed
}
