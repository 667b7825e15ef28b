use anyhow::Result;

use crate::config::QuotebookConfig;
use crate::store::stats::store_stats;

/// Display store statistics in the terminal.
pub fn stats(config: &QuotebookConfig) -> Result<()> {
    let kv = super::open_store(config)?;
    let stats = store_stats(&kv);

    println!("Quotebook Statistics");
    println!("{}", "=".repeat(40));
    println!("  Quotes:        {}", stats.quotes);
    println!("  Favorites:     {}", stats.favorites);
    println!("  Reflections:   {}", stats.reflections);
    println!(
        "  Credential:    {}",
        if stats.credential_configured {
            "configured"
        } else {
            "not set"
        }
    );

    Ok(())
}
