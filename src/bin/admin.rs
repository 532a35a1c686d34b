//! CLI administration tool for alias-shortener.
//!
//! Talks to PostgreSQL directly, without going through the HTTP API. Inputs
//! pass the same validation as `POST /urls` and `GET /urls`.
//!
//! # Usage
//!
//! ```bash
//! # Create an alias (generated when --alias is omitted)
//! cargo run --bin admin -- create https://www.rust-lang.org --alias rust
//!
//! # Show one alias with its access count (not counted as an access)
//! cargo run --bin admin -- show rust
//!
//! # Most accessed aliases
//! cargo run --bin admin -- top --limit 5
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`
//! - `ALIAS_LENGTH` (optional): length of generated aliases, 4-20 (default: 8)

use alias_shortener::application::services::UrlService;
use alias_shortener::application::commands::{CreateUrlCommand, ListTopQuery};
use alias_shortener::config::{alias_length_from_env, database_url_from_env};
use alias_shortener::infrastructure::persistence::PgUrlRepository;
use alias_shortener::utils::alias_generator::RandomAliasGenerator;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing alias-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an alias for a URL
    Create {
        /// Destination URL
        url: String,

        /// Custom alias (3-20 letters, digits or underscores)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Show a single alias without counting an access
    Show {
        alias: String,
    },

    /// List the most accessed aliases
    Top {
        /// Number of aliases to show (1-20)
        #[arg(short, long)]
        limit: Option<String>,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = database_url_from_env()?;
    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Create { url, alias } => create_alias(url_service(&pool)?, url, alias).await?,
        Commands::Show { alias } => show_alias(url_service(&pool)?, alias).await?,
        Commands::Top { limit } => list_top(url_service(&pool)?, limit).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn url_service(pool: &PgPool) -> Result<UrlService> {
    let alias_length = alias_length_from_env()?;

    Ok(UrlService::new(
        Arc::new(PgUrlRepository::new(Arc::new(pool.clone()))),
        Arc::new(RandomAliasGenerator),
        alias_length,
    ))
}

async fn create_alias(service: UrlService, url: String, alias: Option<String>) -> Result<()> {
    println!("{}", "🔗 Create Alias".bright_blue().bold());
    println!();

    let command = CreateUrlCommand::from_json(json!({ "original_url": url, "alias": alias }))?;

    let record = service
        .create_alias(command.alias, command.original_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create alias: {}", e))?;

    println!("{}", "✅ Alias created".green().bold());
    println!("  Alias: {}", record.alias.bright_yellow().bold());
    println!("  URL:   {}", record.original_url.cyan());
    println!();

    Ok(())
}

/// Prints one record. Reads through `resolve_alias`, which never queues an
/// access, so the printed count is left unchanged.
async fn show_alias(service: UrlService, alias: String) -> Result<()> {
    let record = service
        .resolve_alias(&alias)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to show '{}': {}", alias, e))?;

    println!("  Alias:    {}", record.alias.bright_yellow().bold());
    println!("  URL:      {}", record.original_url.cyan());
    println!(
        "  Accesses: {}",
        record.access_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Prints the ranked listing.
///
/// # Output Format
///
/// ```text
/// 📊 Top aliases
///
///   #   Alias                Accesses   URL
///   ───────────────────────────────────────────────────────────
///   1   rust                 42         https://www.rust-lang.org
/// ```
async fn list_top(service: UrlService, limit: Option<String>) -> Result<()> {
    let query = match limit {
        Some(limit) => ListTopQuery::from_query([("limit", limit)])?,
        None => ListTopQuery::default(),
    };

    let ranked = service
        .list_top(query.limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list aliases: {}", e))?;

    println!("{}", "📊 Top aliases".bright_blue().bold());
    println!();

    if ranked.items.is_empty() {
        println!("{}", "  No aliases found".yellow());
        return Ok(());
    }

    println!(
        "  {:<3} {:<20} {:<10} {}",
        "#".bright_white().bold(),
        "Alias".bright_white().bold(),
        "Accesses".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(60).bright_black());

    for (rank, record) in ranked.items.iter().enumerate() {
        println!(
            "  {:<3} {:<20} {:<10} {}",
            (rank + 1).to_string().bright_black(),
            record.alias.cyan(),
            record.access_count.to_string().bright_green(),
            record.original_url
        );
    }

    println!();
    println!(
        "  Shown: {} of limit {}",
        ranked.count.to_string().bright_white().bold(),
        query.limit
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let aliases: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Aliases:    {}", aliases.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}
