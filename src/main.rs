use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use quotebook::{cli, config};

#[derive(Parser)]
#[command(name = "quotebook", version, about = "Local quote journal")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Save a new quote
    Add {
        /// The quote text
        text: String,
    },
    /// List quotes, newest first
    List {
        /// Show only favorited quotes
        #[arg(long)]
        favorites: bool,
    },
    /// Replace the text of a quote
    Edit {
        /// Quote id (a unique prefix is enough)
        id: String,
        /// The new text
        text: String,
    },
    /// Delete a quote (and its favorite membership)
    Delete {
        /// Quote id (a unique prefix is enough)
        id: String,
    },
    /// Mark a quote as a favorite
    Favorite { id: String },
    /// Remove a quote from the favorites
    Unfavorite { id: String },
    /// Attach a reflection to a quote
    Reflect {
        /// Quote id (a unique prefix is enough)
        quote_id: String,
        /// The reflection text
        text: String,
    },
    /// List or manage reflections
    Reflections {
        #[command(subcommand)]
        action: Option<ReflectionAction>,
    },
    /// Generate a quote via the remote service
    Generate {
        /// Optional theme for the quote
        prompt: Option<String>,
        /// Save the generated quote to the store
        #[arg(long)]
        save: bool,
    },
    /// Manage the generation-service credential
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },
    /// Show store statistics
    Stats,
    /// Export all collections as JSON to stdout
    Export,
    /// Import a snapshot from a JSON file
    Import {
        /// Path to a JSON file produced by `export`
        file: PathBuf,
    },
    /// Delete all local data
    Reset,
}

#[derive(Subcommand)]
enum ReflectionAction {
    /// List reflections, optionally for one quote
    List { quote_id: Option<String> },
    /// Replace the text of a reflection
    Edit { id: String, text: String },
    /// Delete a reflection
    Delete { id: String },
}

#[derive(Subcommand)]
enum KeyAction {
    /// Store a credential (prompts if not given)
    Set { value: Option<String> },
    /// Remove the stored credential
    Remove,
    /// Ask the remote service whether the credential is accepted
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for log level)
    let config = config::QuotebookConfig::load()?;

    // Initialize tracing with the configured log level. Log to stderr so
    // stdout stays clean for quote text and JSON exports.
    let filter =
        EnvFilter::try_new(&config.cli.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Add { text } => cli::quotes::add(&config, &text)?,
        Command::List { favorites } => cli::quotes::list(&config, favorites)?,
        Command::Edit { id, text } => cli::quotes::edit(&config, &id, &text)?,
        Command::Delete { id } => cli::quotes::delete(&config, &id)?,
        Command::Favorite { id } => cli::favorites::favorite(&config, &id)?,
        Command::Unfavorite { id } => cli::favorites::unfavorite(&config, &id)?,
        Command::Reflect { quote_id, text } => cli::reflections::reflect(&config, &quote_id, &text)?,
        Command::Reflections { action } => match action {
            Some(ReflectionAction::List { quote_id }) => {
                cli::reflections::list(&config, quote_id.as_deref())?
            }
            Some(ReflectionAction::Edit { id, text }) => {
                cli::reflections::edit(&config, &id, &text)?
            }
            Some(ReflectionAction::Delete { id }) => cli::reflections::delete(&config, &id)?,
            None => cli::reflections::list(&config, None)?,
        },
        Command::Generate { prompt, save } => {
            cli::generate::generate(&config, prompt.as_deref(), save).await?
        }
        Command::Key { action } => match action {
            KeyAction::Set { value } => cli::credential::set(&config, value.as_deref())?,
            KeyAction::Remove => cli::credential::remove(&config)?,
            KeyAction::Check => cli::credential::check(&config).await?,
        },
        Command::Stats => cli::stats::stats(&config)?,
        Command::Export => cli::export::export(&config)?,
        Command::Import { file } => cli::import::import(&config, &file)?,
        Command::Reset => cli::reset::reset(&config)?,
    }

    Ok(())
}
