//! CLI reflection commands — attach commentary to quotes.

use anyhow::{bail, Result};

use crate::config::QuotebookConfig;
use crate::store::types::{new_id, now_timestamp, Reflection, ReflectionPatch};
use crate::store::{quotes, reflections};

/// Attach a reflection to an existing quote.
pub fn reflect(config: &QuotebookConfig, quote_id: &str, text: &str) -> Result<()> {
    let text = text.trim();
    if text.is_empty() {
        bail!("reflection text must not be empty");
    }

    let kv = super::open_store(config)?;
    let all = quotes::get_all(&kv);
    let Some(full_quote_id) = super::resolve_id(all.iter().map(|q| q.id.as_str()), quote_id)
    else {
        bail!("no quote matches id '{quote_id}'");
    };

    let reflection = Reflection {
        id: new_id(),
        quote_id: full_quote_id.clone(),
        text: text.to_string(),
        created_at: now_timestamp(),
    };
    let id = reflection.id.clone();

    if !reflections::create(&kv, reflection) {
        bail!("failed to save reflection");
    }

    println!(
        "Saved reflection [{}] on quote [{}]",
        super::short_id(&id),
        super::short_id(&full_quote_id)
    );
    Ok(())
}

/// List reflections — all of them, or just those on one quote.
pub fn list(config: &QuotebookConfig, quote_id: Option<&str>) -> Result<()> {
    let kv = super::open_store(config)?;

    let shown = match quote_id {
        Some(given) => {
            let all = quotes::get_all(&kv);
            let Some(full_id) = super::resolve_id(all.iter().map(|q| q.id.as_str()), given)
            else {
                bail!("no quote matches id '{given}'");
            };
            reflections::list_for_quote(&kv, &full_id)
        }
        None => reflections::get_all(&kv),
    };

    if shown.is_empty() {
        println!("No reflections.");
        return Ok(());
    }

    for reflection in &shown {
        // An orphaned reflection (quote deleted) renders without its quote.
        match quotes::get(&kv, &reflection.quote_id) {
            Some(quote) => println!(
                "  [{}] on \"{}\": {}",
                super::short_id(&reflection.id),
                quote.text,
                reflection.text
            ),
            None => println!(
                "  [{}] (quote removed): {}",
                super::short_id(&reflection.id),
                reflection.text
            ),
        }
    }
    Ok(())
}

/// Replace the text of an existing reflection.
pub fn edit(config: &QuotebookConfig, id: &str, text: &str) -> Result<()> {
    let text = text.trim();
    if text.is_empty() {
        bail!("reflection text must not be empty");
    }

    let kv = super::open_store(config)?;
    let all = reflections::get_all(&kv);
    let Some(full_id) = super::resolve_id(all.iter().map(|r| r.id.as_str()), id) else {
        bail!("no reflection matches id '{id}'");
    };

    let patch = ReflectionPatch {
        quote_id: None,
        text: Some(text.to_string()),
    };
    if !reflections::update(&kv, &full_id, &patch) {
        bail!("failed to update reflection '{id}'");
    }

    println!("Updated reflection [{}]", super::short_id(&full_id));
    Ok(())
}

/// Delete a reflection.
pub fn delete(config: &QuotebookConfig, id: &str) -> Result<()> {
    let kv = super::open_store(config)?;
    let all = reflections::get_all(&kv);
    let full_id = super::resolve_id(all.iter().map(|r| r.id.as_str()), id)
        .unwrap_or_else(|| id.to_string());

    if !reflections::delete(&kv, &full_id) {
        bail!("failed to delete reflection '{id}'");
    }

    println!("Deleted reflection [{}]", super::short_id(&full_id));
    Ok(())
}
