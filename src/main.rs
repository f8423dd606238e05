//! sifcache - Library image cache
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use sifcache::cache::LibraryCache;
use sifcache::cli::{Cli, Commands};
use sifcache::config::{resolve_cache_dir, ConfigManager};
use sifcache::error::CacheResult;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::from(2)
        }
    }
}

async fn run() -> CacheResult<ExitCode> {
    let cli = Cli::parse();

    // Load configuration
    let config_manager = if let Some(ref path) = cli.config {
        ConfigManager::with_path(path.clone())
    } else {
        ConfigManager::new()
    };
    let config = config_manager.load().await?;

    // Initialize logging: 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("sifcache=warn"),
        1 => EnvFilter::new("sifcache=info"),
        _ => EnvFilter::new("sifcache=debug"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    if config.general.json_logs() {
        subscriber.json().init();
    } else {
        subscriber.without_time().init();
    }

    if config_manager.path().exists() {
        debug!("Loaded config from {}", config_manager.path().display());
    } else {
        debug!("Config file not found, using defaults");
    }

    let dir = resolve_cache_dir(&config, cli.cache_dir.map(PathBuf::from));
    debug!("Cache root: {}", dir.root().display());
    let cache = LibraryCache::new(dir);

    // Dispatch to command
    match cli.command {
        Commands::Dir(args) => sifcache::cli::commands::dir(args, &cache).await?,
        Commands::Path(args) => sifcache::cli::commands::path(args, &cache).await?,
        Commands::Exists(args) => {
            if !sifcache::cli::commands::exists(args, &cache).await? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Hash(args) => sifcache::cli::commands::hash(args).await?,
        Commands::Import(args) => sifcache::cli::commands::import(args, &cache).await?,
        Commands::List(args) => sifcache::cli::commands::list(args, &cache).await?,
        Commands::Remove(args) => sifcache::cli::commands::remove(args, &cache).await?,
        Commands::Clean(args) => sifcache::cli::commands::clean(args, &cache).await?,
        Commands::Config(args) => {
            sifcache::cli::commands::config(args, &config_manager, &config, cache.dir()).await?
        }
    }

    Ok(ExitCode::SUCCESS)
}
