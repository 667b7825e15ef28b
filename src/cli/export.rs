use anyhow::Result;

use crate::config::QuotebookConfig;
use crate::store::snapshot::export_snapshot;

/// Export all collections as JSON to stdout.
pub fn export(config: &QuotebookConfig) -> Result<()> {
    let kv = super::open_store(config)?;
    let snapshot = export_snapshot(&kv);

    let json = serde_json::to_string_pretty(&snapshot)?;
    println!("{json}");

    eprintln!(
        "Exported {} quotes, {} favorites, {} reflections.",
        snapshot.quotes.len(),
        snapshot.favorites.len(),
        snapshot.reflections.len()
    );

    Ok(())
}
