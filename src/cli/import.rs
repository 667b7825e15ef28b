use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::path::Path;

use crate::config::QuotebookConfig;
use crate::store::snapshot::import_snapshot;
use crate::store::stats::store_stats;

/// Import a snapshot from a JSON file.
///
/// Each collection present in the file wholly replaces the stored one.
/// Collections import independently: on a partial failure, whatever
/// succeeded stays applied and the command reports the failure.
pub fn import(config: &QuotebookConfig, file: &Path) -> Result<()> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read import file: {}", file.display()))?;

    let data: Value = serde_json::from_str(&json).context("failed to parse import JSON")?;

    let kv = super::open_store(config)?;
    let ok = import_snapshot(&kv, &data);

    let stats = store_stats(&kv);
    println!("Store now holds:");
    println!("  Quotes:      {}", stats.quotes);
    println!("  Favorites:   {}", stats.favorites);
    println!("  Reflections: {}", stats.reflections);

    if !ok {
        bail!("import completed partially — one or more collections failed to apply");
    }

    println!("Import complete.");
    Ok(())
}
