//! CLI administration tool for redis-shortener.
//!
//! Talks to the configured backend directly, without going through the HTTP
//! API. Useful for seeding links and inspecting hit counters.
//!
//! # Usage
//!
//! ```bash
//! # Compute a short code without touching the backend
//! cargo run --bin admin -- encode http://www.nationalreview.com
//!
//! # Store a link
//! cargo run --bin admin -- create http://www.nationalreview.com
//!
//! # Resolve a code
//! cargo run --bin admin -- lookup bs1I92
//!
//! # Show hit counters
//! cargo run --bin admin -- stats bs1I92
//!
//! # Check backend connection
//! cargo run --bin admin -- check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `REDIS_URL` or `REDIS_HOST`/`REDIS_PORT`/`REDIS_PASSWORD`/`REDIS_DB`.
//! Without them the tool runs against an empty in-memory backend, which is
//! only useful for `encode`.

use redis_shortener::application::services::LinkStore;
use redis_shortener::config::{self, Config};
use redis_shortener::domain::clock::SystemClock;
use redis_shortener::domain::error::StoreError;
use redis_shortener::domain::repositories::{KvBackend, UrlStore};
use redis_shortener::server::connect_backend;
use redis_shortener::utils::code_generator::encode_short_code;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing redis-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the short code for a URL (offline)
    Encode {
        /// Long URL
        url: String,
    },

    /// Store a URL and print its short code
    Create {
        /// Long URL
        url: String,
    },

    /// Resolve a short code to its URL
    Lookup {
        /// Short code
        code: String,
    },

    /// Show hit counters for a short code
    Stats {
        /// Short code
        code: String,
    },

    /// Check backend connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { url } => {
            println!("{}", encode_short_code(&url).bright_green().bold());
        }
        Commands::Create { url } => create(&connect_store().await?, &url).await?,
        Commands::Lookup { code } => lookup(&connect_store().await?, &code).await?,
        Commands::Stats { code } => stats(&connect_store().await?, &code).await?,
        Commands::Check => {
            let config = load_config()?;
            let backend = connect_backend(&config).await?;
            check(backend.as_ref(), &config).await?;
        }
    }

    Ok(())
}

fn load_config() -> Result<Config> {
    config::load_from_env().context("Invalid configuration")
}

async fn connect_store() -> Result<LinkStore<dyn KvBackend, SystemClock>> {
    let backend = connect_backend(&load_config()?).await?;
    Ok(LinkStore::new(backend, Arc::new(SystemClock)))
}

async fn create(store: &impl UrlStore, url: &str) -> Result<()> {
    let code = store
        .save_url(url)
        .await
        .context("Failed to save URL")?;

    println!("{}", "✅ Link stored".green().bold());
    println!("  URL:  {}", url.cyan());
    println!("  Code: {}", code.bright_yellow().bold());

    Ok(())
}

async fn lookup(store: &impl UrlStore, code: &str) -> Result<()> {
    match store.get_url(code).await {
        Ok(url) => println!("  {} -> {}", code.bright_yellow(), url.cyan()),
        Err(StoreError::NotFound) => {
            println!("{}", format!("⚠️  No link for code '{}'", code).yellow())
        }
        Err(e) => return Err(e).context("Failed to look up code"),
    }

    Ok(())
}

/// Prints the total and the per-day breakdown, oldest day first.
///
/// ```text
/// 📊 Hits for ghjk
///
///   Total: 387
///
///   2015-07-22    14
///   2015-11-03    76
///   2016-01-03    31
/// ```
async fn stats(store: &impl UrlStore, code: &str) -> Result<()> {
    let hits = match store.get_hits(code).await {
        Ok(hits) => hits,
        Err(StoreError::NotFound) => {
            println!("{}", format!("⚠️  No hits recorded for '{}'", code).yellow());
            return Ok(());
        }
        Err(e) => return Err(e).context("Failed to read hit counters"),
    };

    println!("{}", format!("📊 Hits for {}", code).bright_blue().bold());
    println!();
    println!(
        "  Total: {}",
        hits.count.to_string().bright_white().bold()
    );
    println!();

    for (day, count) in &hits.days {
        println!(
            "  {}  {:>6}",
            day.format("%Y-%m-%d").to_string().bright_black(),
            count.to_string().bright_green()
        );
    }

    Ok(())
}

async fn check(backend: &dyn KvBackend, config: &Config) -> Result<()> {
    println!("{}", "🔍 Checking backend connection...".bright_blue());

    backend.ping().await.context("Backend ping failed")?;

    let kind = if config.redis_url.is_some() {
        "Redis"
    } else {
        "in-memory"
    };
    println!("{}", format!("✅ {} backend OK", kind).green().bold());

    Ok(())
}
