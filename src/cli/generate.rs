//! CLI `generate` command — request a quote from the remote service.

use anyhow::{bail, Result};

use crate::config::QuotebookConfig;
use crate::generate::GenerationClient;
use crate::store::types::{new_id, now_timestamp, Quote};
use crate::store::quotes;

/// Generate a quote, print it, and optionally save it to the store.
pub async fn generate(config: &QuotebookConfig, prompt: Option<&str>, save: bool) -> Result<()> {
    let kv = super::open_store(config)?;

    let client = GenerationClient::new(&config.generation, crate::credential::get(&kv))?;
    let text = client.generate_quote(prompt).await?;

    println!("{text}");

    if save {
        let quote = Quote {
            id: new_id(),
            text,
            created_at: now_timestamp(),
        };
        let id = quote.id.clone();
        if !quotes::create(&kv, quote) {
            bail!("generated, but failed to save the quote");
        }
        println!("Saved as [{}]", super::short_id(&id));
    }

    Ok(())
}
