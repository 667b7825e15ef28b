//! Quotebook — a single-user, local quote journal.
//!
//! Store short text quotes, mark favorites, attach free-text reflections,
//! and optionally generate new quotes via a remote completion service. All
//! state lives in a local SQLite-backed key-value store; there is no sync,
//! no server, and no second writer.
//!
//! # Architecture
//!
//! - **Storage**: a single key-value table holding each collection as one
//!   JSON-serialized value under a namespaced key
//! - **Consistency**: the entity store is the only writer; deleting a quote
//!   scrubs it from the favorite set, and favorite status is derived from
//!   set membership alone
//! - **Generation**: one authenticated HTTP request per quote, no retries,
//!   no streaming
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`kv`] — Key-value persistence adapter with failure containment
//! - [`store`] — Entity store: quotes, favorites, reflections, stats, snapshots
//! - [`credential`] — Stored generation-service credential
//! - [`generate`] — Client for the remote completion endpoint

pub mod cli;
pub mod config;
pub mod credential;
pub mod generate;
pub mod kv;
pub mod store;
