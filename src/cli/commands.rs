use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{TimeZone, Utc};
use clap::{Parser, Subcommand};

use crate::gateway::{AiGateway, HttpGateway};
use crate::history::{FileBackend, HistoryStore};
use crate::models::{ActivityDraft, ActivityKind, AspectRatio, ResearchMode};
use crate::tui;
use crate::utils::{data_dir, data_uri_to_bytes, file_to_data_uri, strip_ansi_codes};

#[derive(Parser)]
#[command(name = "glamstride")]
#[command(version = "0.1.0")]
#[command(about = "AI studio for a fashion storefront: images, research, strategy, copy", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a product image and store it in the activity history
    Imagine {
        prompt: String,
        /// Aspect ratio: 1:1, 2:3, 3:2, 3:4, 4:3, 9:16, 16:9 or 21:9
        #[arg(long, default_value = "1:1")]
        aspect: AspectRatio,
        /// Write the decoded image here
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Edit an existing product image with a text instruction
    Retouch {
        image: PathBuf,
        instruction: String,
        /// Write the decoded result here
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Search-grounded market research
    Research {
        query: String,
        /// Produce a product report instead of a trend report
        #[arg(long)]
        product: bool,
    },
    /// Draft a long-form business strategy
    Strategy { brief: String },
    /// Generate three short marketing lines
    Copy { topic: String },
    /// Show recorded activity, newest first
    History {
        /// Show at most this many records
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Remove one activity record by id
    Forget { id: String },
    /// Delete all recorded activity
    ClearHistory,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            // No subcommand: launch the interactive shell
            let gateway = HttpGateway::from_env()?;
            let store = open_store()?;
            tui::run_interactive(gateway, store)
        }
        Some(command) => execute(command),
    }
}

fn open_store() -> Result<HistoryStore<FileBackend>> {
    Ok(HistoryStore::new(FileBackend::new(data_dir()?)))
}

fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Imagine { prompt, aspect, out } => {
            let gateway = HttpGateway::from_env()?;
            let data_uri = gateway.generate_image(&prompt, aspect)?;
            open_store()?.append(ActivityDraft::from_prompt(
                ActivityKind::ImageGen,
                &prompt,
                data_uri.clone(),
            ));
            write_image(&data_uri, out.as_deref())
        }
        Commands::Retouch { image, instruction, out } => {
            let gateway = HttpGateway::from_env()?;
            let source = file_to_data_uri(&image)?;
            let edited = gateway.edit_image(&source, &instruction)?;
            open_store()?.append(ActivityDraft::from_prompt(
                ActivityKind::ImageEdit,
                &instruction,
                edited.clone(),
            ));
            write_image(&edited, out.as_deref())
        }
        Commands::Research { query, product } => {
            let gateway = HttpGateway::from_env()?;
            let mode = if product { ResearchMode::Product } else { ResearchMode::Trend };
            let findings = gateway.research(&query, mode)?;
            open_store()?.append(ActivityDraft::from_prompt(
                ActivityKind::MarketResearch,
                &query,
                findings.text.clone(),
            ));

            println!("{}", strip_ansi_codes(&findings.text));
            if !findings.sources.is_empty() {
                println!();
                println!("Sources:");
                for source in &findings.sources {
                    println!("  - {} ({})", strip_ansi_codes(&source.title), source.uri);
                }
            }
            Ok(())
        }
        Commands::Strategy { brief } => {
            let gateway = HttpGateway::from_env()?;
            let plan = gateway.draft_strategy(&brief)?;
            open_store()?.append(ActivityDraft::from_prompt(
                ActivityKind::Strategy,
                &brief,
                plan.clone(),
            ));
            println!("{}", strip_ansi_codes(&plan));
            Ok(())
        }
        Commands::Copy { topic } => {
            let gateway = HttpGateway::from_env()?;
            let copy = gateway.quick_copy(&topic)?;
            open_store()?.append(ActivityDraft::from_prompt(
                ActivityKind::QuickCopy,
                &topic,
                copy.clone(),
            ));
            println!("{}", strip_ansi_codes(&copy));
            Ok(())
        }
        Commands::History { limit } => show_history(limit),
        Commands::Forget { id } => {
            open_store()?.remove(&id);
            println!("Removed record {} (no-op if it did not exist)", id);
            Ok(())
        }
        Commands::ClearHistory => {
            open_store()?.clear();
            println!("Activity history cleared");
            Ok(())
        }
    }
}

fn show_history(limit: Option<usize>) -> Result<()> {
    let records = open_store()?.list();
    if records.is_empty() {
        println!("No activity recorded yet");
        return Ok(());
    }

    let shown = limit.unwrap_or(records.len()).min(records.len());
    println!("Activity history ({} of {} records)", shown, records.len());
    println!("========================================");

    for (idx, record) in records.iter().take(shown).enumerate() {
        let when = Utc
            .timestamp_millis_opt(record.timestamp)
            .single()
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "unknown".to_string());

        println!(
            "{}. [{}] {} ({})",
            idx + 1,
            record.kind.label(),
            strip_ansi_codes(&record.title),
            when
        );
        println!("   id: {}", record.id);
    }

    Ok(())
}

fn write_image(data_uri: &str, out: Option<&std::path::Path>) -> Result<()> {
    match out {
        Some(path) => {
            let bytes = data_uri_to_bytes(data_uri)?;
            fs::write(path, &bytes)
                .with_context(|| format!("Failed to write image: {}", path.display()))?;
            println!("Saved image to {} ({} KB)", path.display(), bytes.len() / 1024);
        }
        None => {
            println!(
                "Image generated ({} KB) and stored in history; pass --out to write a file",
                data_uri.len() / 1024
            );
        }
    }
    Ok(())
}
