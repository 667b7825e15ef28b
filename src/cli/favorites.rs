//! CLI favorite commands — mark and unmark quotes.

use anyhow::{bail, Result};

use crate::config::QuotebookConfig;
use crate::store::{favorites, quotes};

/// Mark a quote as a favorite.
pub fn favorite(config: &QuotebookConfig, id: &str) -> Result<()> {
    let kv = super::open_store(config)?;
    let all = quotes::get_all(&kv);
    let Some(full_id) = super::resolve_id(all.iter().map(|q| q.id.as_str()), id) else {
        bail!("no quote matches id '{id}'");
    };

    if !favorites::add(&kv, &full_id) {
        bail!("failed to favorite quote '{id}'");
    }

    println!("Favorited [{}]", super::short_id(&full_id));
    Ok(())
}

/// Remove a quote from the favorite set.
pub fn unfavorite(config: &QuotebookConfig, id: &str) -> Result<()> {
    let kv = super::open_store(config)?;
    let ids = favorites::list(&kv);
    let full_id = super::resolve_id(ids.iter().map(String::as_str), id)
        .unwrap_or_else(|| id.to_string());

    if !favorites::remove(&kv, &full_id) {
        bail!("failed to unfavorite quote '{id}'");
    }

    println!("Unfavorited [{}]", super::short_id(&full_id));
    Ok(())
}
