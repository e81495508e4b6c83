//! CLI administration tool for kv-shortener.
//!
//! Talks to the configured record store directly, without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create a link that expires in one day
//! cargo run --bin admin -- create https://example.com --expires-in 86400 --hits 10
//!
//! # Show where a code redirects
//! cargo run --bin admin -- resolve <code>
//!
//! # Show the raw stored attributes
//! cargo run --bin admin -- inspect <code>
//!
//! # Delete a code
//! cargo run --bin admin -- delete <code>
//!
//! # Check store connection
//! cargo run --bin admin -- ping
//! ```
//!
//! Reads the same environment variables as the server (`REDIS_URL`,
//! `KEY_PREFIX`, ...).

use kv_shortener::application::services::ShortenerService;
use kv_shortener::config::{self, Config, StoreBackend};
use kv_shortener::domain::entities::{Expiry, NewLink};
use kv_shortener::error::AppError;
use kv_shortener::server::{build_service, connect_store};

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for managing kv-shortener links.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a short link
    Create {
        /// Destination URL
        url: String,

        /// Seconds from now until the link expires
        #[arg(short, long, default_value_t = 86_400)]
        expires_in: i64,

        /// Requested hit budget (stored, not enforced)
        #[arg(long, default_value_t = 0)]
        hits: i64,
    },

    /// Print the destination of a code
    Resolve { code: String },

    /// Print the stored attributes of a code
    Inspect { code: String },

    /// Delete every key of a code
    Delete {
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Check store connection
    Ping,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    if config.store_backend == StoreBackend::Memory {
        println!(
            "{}",
            "⚠️  STORE_BACKEND=memory: changes vanish when this command exits".yellow()
        );
    }

    let store = connect_store(&config).await?;
    let service = build_service(&config, store);

    match cli.command {
        Commands::Create {
            url,
            expires_in,
            hits,
        } => create_link(&service, &config, url, expires_in, hits).await?,
        Commands::Resolve { code } => resolve_link(&service, &code).await?,
        Commands::Inspect { code } => inspect_link(&service, &code).await?,
        Commands::Delete { code, yes } => delete_link(&service, &code, yes).await?,
        Commands::Ping => ping(&service, &config).await?,
    }

    Ok(())
}

fn format_timestamp(ts: i64) -> String {
    DateTime::<Utc>::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| ts.to_string())
}

fn service_error(e: AppError) -> anyhow::Error {
    anyhow::anyhow!("{}", e)
}

async fn create_link(
    service: &ShortenerService,
    config: &Config,
    url: String,
    expires_in: i64,
    hits: i64,
) -> Result<()> {
    println!("{}", "🔗 Create Short Link".bright_blue().bold());
    println!();

    let expire_at = Utc::now().timestamp() + expires_in;
    let link = service
        .create(NewLink {
            full_url: url,
            expire_at,
            hit_budget: hits,
        })
        .await
        .map_err(service_error)?;

    let base = config
        .public_base_url
        .clone()
        .unwrap_or_else(|| format!("http://{}", config.listen_addr));

    println!("  Code:      {}", link.code.bright_yellow().bold());
    println!("  Short URL: {}", link.short_url(&base).cyan());
    println!("  Target:    {}", link.full_url);
    println!("  Expires:   {}", format_timestamp(link.expire_at).bright_black());
    println!("  Hits:      {}", link.hit_budget.to_string().bright_black());
    println!();
    println!("{}", "✅ Link created".green().bold());

    Ok(())
}

async fn resolve_link(service: &ShortenerService, code: &str) -> Result<()> {
    match service.resolve(code).await {
        Ok(url) => {
            println!("{} {}", code.bright_yellow(), "→".bright_black());
            println!("  {}", url.cyan());
        }
        Err(AppError::Expired { .. }) => println!("{}", "⌛ Link has expired".yellow()),
        Err(AppError::NotFound { .. }) => println!("{}", "❌ Link not found".red()),
        Err(e) => return Err(service_error(e)),
    }

    Ok(())
}

/// Prints the raw record.
///
/// # Output Format
///
/// ```text
/// 🔍 <code>
///
///   full    https://example.com
///   expire  1900000000 (2030-03-17 17:46:40 UTC) ACTIVE
///   hits    10
/// ```
async fn inspect_link(service: &ShortenerService, code: &str) -> Result<()> {
    let record = match service.inspect(code).await {
        Ok(record) => record,
        Err(AppError::NotFound { .. }) => {
            println!("{}", "❌ Link not found".red());
            return Ok(());
        }
        Err(e) => return Err(service_error(e)),
    };

    println!("{} {}", "🔍".bright_blue(), record.code.bright_yellow().bold());
    println!();

    let missing = || "(missing)".bright_black().to_string();

    println!(
        "  {:<7} {}",
        "full".bright_white().bold(),
        record.full_url.clone().unwrap_or_else(missing).cyan()
    );

    let now = Utc::now().timestamp();
    let expiry = record.expiry();
    let status = if expiry.has_passed(now) {
        "EXPIRED".red()
    } else {
        "ACTIVE".green()
    };
    let expire_text = match expiry {
        Expiry::At(ts) => format!("{} ({})", ts, format_timestamp(ts)),
        Expiry::Untracked => "not tracked".to_string(),
        Expiry::Corrupt => format!("corrupt: {:?}", record.expire.as_deref().unwrap_or("")),
    };
    println!(
        "  {:<7} {} {}",
        "expire".bright_white().bold(),
        expire_text,
        status
    );

    let hits_text = match record.hit_budget() {
        Some(hits) => hits.to_string(),
        None => record.hits.clone().unwrap_or_else(missing),
    };
    println!("  {:<7} {}", "hits".bright_white().bold(), hits_text);
    println!();

    Ok(())
}

async fn delete_link(service: &ShortenerService, code: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Short Link".bright_blue().bold());
    println!();
    println!("  Code: {}", code.bright_yellow());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service.delete(code).await.map_err(service_error)?;

    println!("{}", "✅ Link deleted".green().bold());
    println!();

    Ok(())
}

async fn ping(service: &ShortenerService, config: &Config) -> Result<()> {
    println!("{}", "🔌 Store Connection Check".bright_blue().bold());
    println!();

    let backend = match config.store_backend {
        StoreBackend::Redis => "redis",
        StoreBackend::Memory => "memory",
    };
    println!("  Backend:    {}", backend.cyan());
    println!("  Key prefix: {}", service.keys().prefix().cyan());
    println!();

    if service.store_healthy().await {
        println!("{}", "✅ Store is reachable".green().bold());
        Ok(())
    } else {
        anyhow::bail!("Store did not answer PING")
    }
}
