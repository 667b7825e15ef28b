//! CLI `key` commands — manage the generation-service credential.

use anyhow::{bail, Result};
use std::io::Write;

use crate::config::QuotebookConfig;
use crate::generate::GenerationClient;

/// Store a credential, prompting on stdin if not given as an argument.
pub fn set(config: &QuotebookConfig, value: Option<&str>) -> Result<()> {
    let value = match value {
        Some(v) => v.trim().to_string(),
        None => {
            print!("Paste credential: ");
            std::io::stdout().flush()?;
            let mut input = String::new();
            std::io::stdin().read_line(&mut input)?;
            input.trim().to_string()
        }
    };

    if !crate::credential::is_well_formed(&value) {
        bail!("credential looks malformed (expected an sk-... key)");
    }

    let kv = super::open_store(config)?;
    if !crate::credential::set(&kv, &value) {
        bail!("failed to store credential");
    }

    println!("Credential stored.");
    Ok(())
}

/// Remove the stored credential.
pub fn remove(config: &QuotebookConfig) -> Result<()> {
    let kv = super::open_store(config)?;
    if !crate::credential::remove(&kv) {
        bail!("failed to remove credential");
    }
    println!("Credential removed.");
    Ok(())
}

/// Ask the remote service whether the stored credential is accepted.
pub async fn check(config: &QuotebookConfig) -> Result<()> {
    let kv = super::open_store(config)?;
    let client = GenerationClient::new(&config.generation, crate::credential::get(&kv))?;

    if client.validate_credential().await? {
        println!("Credential accepted by the generation service.");
    } else {
        bail!("the generation service rejected the stored credential");
    }
    Ok(())
}
