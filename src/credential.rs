//! Credential holder — the stored generation-service secret.
//!
//! A single opaque string under its own key, stored in plaintext. The threat
//! model is a single local user with no network exposure of the store, so no
//! encryption at rest.

use crate::kv::KvStore;
use crate::store::keys;

/// Provider key prefix the format check expects.
const CREDENTIAL_PREFIX: &str = "sk-";
/// Shortest credential the format check accepts.
const CREDENTIAL_MIN_LEN: usize = 20;

/// Whether a credential is configured.
pub fn has(kv: &KvStore) -> bool {
    kv.exists(keys::CREDENTIAL)
}

/// The stored credential, if any.
pub fn get(kv: &KvStore) -> Option<String> {
    let value: String = kv.read(keys::CREDENTIAL, String::new());
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Store a credential. Format validation is the caller's job; see
/// [`is_well_formed`].
pub fn set(kv: &KvStore, value: &str) -> bool {
    kv.write(keys::CREDENTIAL, &value)
}

/// Remove the stored credential. Idempotent.
pub fn remove(kv: &KvStore) -> bool {
    kv.remove(keys::CREDENTIAL)
}

/// Shape check only: non-empty, known provider prefix, minimum length.
/// Says nothing about whether the remote service will accept it — that is
/// [`validate_credential`](crate::generate::GenerationClient::validate_credential).
pub fn is_well_formed(value: &str) -> bool {
    let value = value.trim();
    value.starts_with(CREDENTIAL_PREFIX) && value.len() >= CREDENTIAL_MIN_LEN
}
