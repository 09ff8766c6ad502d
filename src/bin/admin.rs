//! CLI administration tool for the bookmark store.
//!
//! Works directly on the data file, so stop the server before making changes
//! or they will be overwritten by its next save.
//!
//! # Usage
//!
//! ```bash
//! # List bookmarks
//! cargo run --bin admin -- list
//!
//! # Add a bookmark
//! cargo run --bin admin -- add example.com/page
//!
//! # Remove bookmarks
//! cargo run --bin admin -- remove https://example.com/page
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check the data file
//! cargo run --bin admin -- check
//! ```
//!
//! # Environment Variables
//!
//! - `DATA_FILE` (optional): bookmark file, resolved like the server does

use bookmarks::application::services::{AddOutcome, BookmarkService};
use bookmarks::config::resolve_data_file;
use bookmarks::domain::repositories::UrlRepository;
use bookmarks::infrastructure::persistence::JsonFileRepository;
use bookmarks::utils::url_normalizer::extract_domain;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::collections::BTreeMap;
use std::sync::Arc;

/// CLI tool for managing bookmarks.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all bookmarks
    List,

    /// Add a bookmark
    Add {
        /// URL to add; `https://` is assumed when no scheme is given
        url: String,
    },

    /// Remove one or more bookmarks
    Remove {
        /// Exact stored URLs to remove
        #[arg(required = true)]
        urls: Vec<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show statistics
    Stats,

    /// Check that the data file is readable
    Check,
}

type Service = BookmarkService<JsonFileRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("Failed to read the working directory")?;
    let data_file = resolve_data_file(std::env::var("DATA_FILE").ok(), &cwd);
    let repo = Arc::new(JsonFileRepository::new(data_file));

    match cli.command {
        Commands::Check => check(&repo).await?,
        Commands::List => list(&open(repo).await?).await,
        Commands::Add { url } => add(&open(repo).await?, &url).await?,
        Commands::Remove { urls, yes } => remove(&open(repo).await?, urls, yes).await?,
        Commands::Stats => stats(&open(repo).await?).await,
    }

    Ok(())
}

/// Loads the bookmark list from `repo`.
async fn open(repo: Arc<JsonFileRepository>) -> Result<Service> {
    let path = repo.path().display().to_string();
    BookmarkService::load(repo)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", path, e))
}

/// Prints every bookmark, newest first.
async fn list(service: &Service) {
    println!("{}", "📋 Bookmarks".bright_blue().bold());
    println!();

    let urls = service.list().await;

    if urls.is_empty() {
        println!("{}", "  No bookmarks yet".yellow());
        println!();
        println!(
            "  Add one with: {} admin -- add <url>",
            "cargo run --bin".bright_cyan()
        );
        return;
    }

    for (i, url) in urls.urls.iter().enumerate() {
        println!(
            "  {:<4} {}",
            (i + 1).to_string().bright_black(),
            url.cyan()
        );
    }

    println!();
    println!("  Total: {}", urls.len().to_string().bright_white().bold());
    println!();
}

async fn add(service: &Service, url: &str) -> Result<()> {
    let outcome = service
        .add(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to add bookmark: {}", e))?;

    match outcome {
        AddOutcome::Added(url) => {
            println!("{} {}", "✅ Added".green().bold(), url.cyan());
        }
        AddOutcome::Duplicate(url) => {
            println!("{} {}", "⚠️  Already bookmarked:".yellow(), url.cyan());
        }
    }

    Ok(())
}

/// Removes bookmarks after confirmation.
///
/// URLs must match stored entries exactly; unknown ones are reported and
/// skipped.
async fn remove(service: &Service, urls: Vec<String>, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Remove Bookmarks".bright_blue().bold());
    println!();

    let current = service.list().await;
    let (known, unknown): (Vec<String>, Vec<String>) =
        urls.into_iter().partition(|url| current.contains(url));

    for url in &unknown {
        println!("  {} {}", "not found:".yellow(), url.bright_black());
    }

    if known.is_empty() {
        println!("{}", "  Nothing to remove".yellow());
        return Ok(());
    }

    for url in &known {
        println!("  {}", url.cyan());
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove {} bookmark(s)?", known.len()))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let removed = service
        .delete(&known)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to remove bookmarks: {}", e))?;

    println!();
    println!(
        "{} {}",
        "✅ Removed".green().bold(),
        removed.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Displays bookmark and per-domain counts.
async fn stats(service: &Service) {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let stats = service.stats().await;
    let urls = service.list().await;

    println!(
        "  Bookmarks: {}",
        stats.total_count.to_string().bright_green().bold()
    );
    println!(
        "  Domains:   {}",
        stats.domain_count().to_string().bright_green().bold()
    );

    let mut per_domain: BTreeMap<String, usize> = BTreeMap::new();
    for url in &urls.urls {
        if let Some(domain) = extract_domain(url) {
            *per_domain.entry(domain).or_default() += 1;
        }
    }

    if !per_domain.is_empty() {
        println!();
        for (domain, count) in &per_domain {
            println!("  {:<40} {}", domain.cyan(), count.to_string().bright_black());
        }
    }
    println!();
}

/// Verifies the data file can be read and decoded.
async fn check(repo: &JsonFileRepository) -> Result<()> {
    println!("{}", "🔍 Checking data file...".bright_blue());
    println!("  Path: {}", repo.path().display().to_string().cyan());

    match repo.load().await {
        Ok(Some(urls)) => {
            println!(
                "{} {} bookmark(s)",
                "✅ Data file is valid:".green().bold(),
                urls.len().to_string().bright_white().bold()
            );
        }
        Ok(None) => {
            println!(
                "{}",
                "⚠️  Data file does not exist yet; it is created on the first change".yellow()
            );
        }
        Err(e) => {
            println!("{}", "❌ Data file is unreadable".red().bold());
            anyhow::bail!("{}", e);
        }
    }

    Ok(())
}
