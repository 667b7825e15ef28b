//! CLI `reset` command — wipe all local data after user confirmation.

use anyhow::{bail, Result};
use std::io::Write;

use crate::config::QuotebookConfig;
use crate::store::keys;

/// Delete all quotes, favorites, reflections, and the stored credential.
pub fn reset(config: &QuotebookConfig) -> Result<()> {
    let store_path = config.resolved_store_path();

    println!("WARNING: This will permanently delete ALL quotes, favorites, reflections,");
    println!("and the stored credential.");
    println!("Store: {}", store_path.display());
    print!("\nType YES to confirm: ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    if input.trim() != "YES" {
        bail!("reset cancelled");
    }

    let kv = super::open_store(config)?;
    if !kv.clear_all(keys::ALL) {
        bail!("reset failed — some data may remain");
    }

    println!("All data deleted. Reset complete.");
    Ok(())
}
