use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use elaeis_content::api::{ContentApi, ContentClient};
use elaeis_content::config::Config;
use elaeis_content::draft::{DestinationDraft, SaveGate, SubmitOutcome};
use elaeis_content::language::{Language, LanguageStore};
use elaeis_content::progress::TranslationProgress;

/// Admin console for Elaeis Berkelana destination content.
#[derive(Parser)]
#[command(name = "elaeis-content", version)]
struct Cli {
    /// Path to the configuration file (overrides discovery)
    #[arg(long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch a destination and print its localized view
    Show {
        slug: String,
        /// Language code (id/en); defaults to the persisted preference
        #[arg(long)]
        language: Option<String>,
    },
    /// Fetch the full bilingual aggregate (admin)
    Raw { slug: String },
    /// Show translation completion percentages
    Status { slug: String },
    /// Create or update a destination from a draft file (admin)
    Publish {
        file: PathBuf,
        /// Skip the incomplete-translation confirmation
        #[arg(long)]
        yes: bool,
    },
    /// Delete a destination by id (admin)
    Delete {
        id: String,
        #[arg(long)]
        yes: bool,
    },
    /// Show or set the persisted language preference
    Language { code: Option<String> },
}

/// Interactive gate: warns about the incomplete pair and asks for an
/// explicit yes before an incomplete save proceeds.
struct PromptGate;

impl SaveGate for PromptGate {
    fn allow_incomplete(&self, progress: &TranslationProgress) -> bool {
        println!(
            "Translation incomplete: Indonesian {}%, English {}%.",
            progress.id, progress.en
        );
        prompt_yes_no("Save anyway?").unwrap_or(false)
    }
}

struct AssumeYes;

impl SaveGate for AssumeYes {
    fn allow_incomplete(&self, _progress: &TranslationProgress) -> bool {
        true
    }
}

fn prompt_yes_no(question: &str) -> io::Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn parse_language(code: &str) -> Result<Language> {
    Language::from_code(code).ok_or_else(|| anyhow!("unknown language code: {}", code))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "elaeis_content=info".to_string()),
        )
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::discover(),
    };
    let client = ContentClient::new(&config.api.base_url, config.api.admin_key.clone());
    let store = LanguageStore::open(config.preference_path(), config.content.default_language);

    match cli.command {
        Command::Show { slug, language } => {
            let language = match language {
                Some(code) => parse_language(&code)?,
                None => store.current(),
            };
            let destination = client.fetch_destination(&slug, language).await?;
            let localized = destination.localize(language);
            println!("{}", serde_json::to_string_pretty(&localized)?);
        }
        Command::Raw { slug } => {
            let destination = client.fetch_raw(&slug).await?;
            println!("{}", serde_json::to_string_pretty(&destination)?);
        }
        Command::Status { slug } => {
            let status = client.translation_status(&slug).await?;
            println!(
                "id: {}%  en: {}%  overall: {}%",
                status.id, status.en, status.overall
            );
        }
        Command::Publish { file, yes } => {
            let mut draft = DestinationDraft::load(&file)?;
            let outcome = if yes {
                draft.submit(&client, &AssumeYes).await?
            } else {
                draft.submit(&client, &PromptGate).await?
            };
            match outcome {
                SubmitOutcome::Created(saved) => {
                    println!(
                        "Created {} ({})",
                        saved.slug,
                        saved.id.as_deref().unwrap_or("no id")
                    );
                }
                SubmitOutcome::Updated(saved) => println!("Updated {}", saved.slug),
                SubmitOutcome::Declined => println!("Save declined; nothing sent"),
            }
        }
        Command::Delete { id, yes } => {
            if !yes && !prompt_yes_no(&format!("Delete destination {}?", id))? {
                println!("Aborted");
                return Ok(());
            }
            client.delete_destination(&id).await?;
            println!("Deleted {}", id);
        }
        Command::Language { code } => match code {
            Some(code) => {
                let language = parse_language(&code)?;
                store.set(language)?;
                info!("Language preference set to {}", language);
                println!("{} ({})", language, language.native_name());
            }
            None => {
                let current = store.current();
                println!("{} ({})", current, current.native_name());
            }
        },
    }

    Ok(())
}
