//! CLI quote commands — add, list, edit, delete.

use anyhow::{bail, Result};

use crate::config::QuotebookConfig;
use crate::store::types::{new_id, now_timestamp, Quote, QuotePatch};
use crate::store::{favorites, quotes};

/// Save a new quote.
pub fn add(config: &QuotebookConfig, text: &str) -> Result<()> {
    let text = text.trim();
    if text.is_empty() {
        bail!("quote text must not be empty");
    }

    let kv = super::open_store(config)?;
    let quote = Quote {
        id: new_id(),
        text: text.to_string(),
        created_at: now_timestamp(),
    };
    let id = quote.id.clone();

    if !quotes::create(&kv, quote) {
        bail!("failed to save quote");
    }

    println!("Saved quote [{}]", super::short_id(&id));
    Ok(())
}

/// List quotes, newest first. With `favorites_only`, restricts to the
/// favorite set (in quote order).
pub fn list(config: &QuotebookConfig, favorites_only: bool) -> Result<()> {
    let kv = super::open_store(config)?;

    let shown = if favorites_only {
        favorites::resolve(&kv)
    } else {
        quotes::get_all(&kv)
    };

    if shown.is_empty() {
        println!("No quotes yet.");
        return Ok(());
    }

    for quote in &shown {
        let favorite = favorites::contains(&kv, &quote.id);
        println!("{}", super::format_quote(quote, favorite));
    }
    Ok(())
}

/// Replace the text of an existing quote.
pub fn edit(config: &QuotebookConfig, id: &str, text: &str) -> Result<()> {
    let text = text.trim();
    if text.is_empty() {
        bail!("quote text must not be empty");
    }

    let kv = super::open_store(config)?;
    let all = quotes::get_all(&kv);
    let Some(full_id) = super::resolve_id(all.iter().map(|q| q.id.as_str()), id) else {
        bail!("no quote matches id '{id}'");
    };

    let patch = QuotePatch {
        text: Some(text.to_string()),
    };
    if !quotes::update(&kv, &full_id, &patch) {
        bail!("failed to update quote '{id}'");
    }

    println!("Updated quote [{}]", super::short_id(&full_id));
    Ok(())
}

/// Delete a quote (and its favorite membership).
pub fn delete(config: &QuotebookConfig, id: &str) -> Result<()> {
    let kv = super::open_store(config)?;
    let all = quotes::get_all(&kv);
    let full_id = super::resolve_id(all.iter().map(|q| q.id.as_str()), id)
        .unwrap_or_else(|| id.to_string());

    if !quotes::delete(&kv, &full_id) {
        bail!("failed to delete quote '{id}'");
    }

    println!("Deleted quote [{}]", super::short_id(&full_id));
    Ok(())
}
