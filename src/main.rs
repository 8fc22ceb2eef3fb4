//! Driftnet main entry point
//!
//! This is the command-line interface for the driftnet web ingest crawler.

use clap::Parser;
use driftnet::config::load_config_with_hash;
use driftnet::crawler::crawl;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Driftnet: a breadth-first web ingest crawler
///
/// Driftnet walks outward from a configured seed list, skips
/// script-dependent pages, and upserts one document per visited page
/// (outbound links and extracted text) into a page store.
#[derive(Parser, Debug)]
#[command(name = "driftnet")]
#[command(version)]
#[command(about = "A breadth-first web ingest crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without crawling
    #[arg(long, conflicts_with = "stats")]
    dry_run: bool,

    /// Show stored-page statistics from the database and exit
    #[arg(long, conflicts_with = "dry_run")]
    stats: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, _config_hash) = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (cfg, hash)
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Handle different modes
    if cli.dry_run {
        handle_dry_run(&config);
    } else if cli.stats {
        handle_stats(&config)?;
    } else {
        handle_crawl(config).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("driftnet=info,warn"),
            1 => EnvFilter::new("driftnet=debug,info"),
            2 => EnvFilter::new("driftnet=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be crawled
fn handle_dry_run(config: &driftnet::config::Config) {
    println!("=== Driftnet Dry Run ===\n");

    println!("Crawler Configuration:");
    println!(
        "  Politeness delay: {}ms",
        config.crawler.politeness_delay
    );

    println!("\nStore:");
    println!("  Database: {}", config.store.database_path);
    println!("  Collection: {}", config.store.collection);

    println!("\nSeeds ({}):", config.seeds.len());
    for seed in &config.seeds {
        println!("  - {}", seed);
    }

    println!("\n✓ Configuration is valid");
    println!("✓ Would start crawling with {} seed URLs", config.seeds.len());
}

/// Handles the --stats mode: shows statistics from the page store
fn handle_stats(config: &driftnet::config::Config) -> anyhow::Result<()> {
    use driftnet::storage::{open_store, PageStore};
    use std::path::Path;

    println!("Database: {}\n", config.store.database_path);

    let store = open_store(
        Path::new(&config.store.database_path),
        &config.store.collection,
    )?;

    let pages = store.count_pages()?;
    println!(
        "Stored pages in '{}': {}",
        config.store.collection, pages
    );

    Ok(())
}

/// Handles the main crawl operation
async fn handle_crawl(config: driftnet::config::Config) -> anyhow::Result<()> {
    tracing::info!("Seed URLs: {}", config.seeds.len());

    match crawl(config).await {
        Ok(()) => {
            tracing::info!("Crawl completed successfully");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e.into())
        }
    }
}
