//! Clean command - remove the whole cache

use super::blocking;
use crate::cache::LibraryCache;
use crate::cli::args::CleanArgs;
use crate::error::CacheResult;
use console::style;
use std::io::{self, Write};

/// Execute the clean command
pub async fn execute(args: CleanArgs, cache: &LibraryCache) -> CacheResult<()> {
    let root = cache.dir().root();

    if !root.exists() {
        println!("Cache {} is already empty.", root.display());
        return Ok(());
    }

    if !args.yes {
        let lister = cache.clone();
        let count = blocking(move || lister.entries()).await?.len();
        println!(
            "This will remove {} and {} cached image(s).",
            root.display(),
            count
        );
        print!("Are you sure? [y/N] ");
        let _ = io::stdout().flush();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            println!("Failed to read input, aborting.");
            return Ok(());
        }

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    let cleaner = cache.clone();
    blocking(move || cleaner.clean()).await?;
    println!("{} removed {}", style("✓").green(), root.display());

    Ok(())
}
