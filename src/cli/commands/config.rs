//! Config command - show configuration

use crate::cache::CacheDir;
use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager};
use crate::error::CacheResult;

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    manager: &ConfigManager,
    config: &Config,
    dir: &CacheDir,
) -> CacheResult<()> {
    match args.action {
        None | Some(ConfigAction::Show) => show_config(config, dir)?,
        Some(ConfigAction::Path) => println!("{}", manager.path().display()),
    }

    Ok(())
}

fn show_config(config: &Config, dir: &CacheDir) -> CacheResult<()> {
    println!("{}", toml::to_string_pretty(config)?);
    println!("# effective cache root: {}", dir.root().display());
    Ok(())
}
