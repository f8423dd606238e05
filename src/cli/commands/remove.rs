//! Remove command - drop a single cached image

use super::blocking;
use crate::cache::LibraryCache;
use crate::cli::args::RemoveArgs;
use crate::error::CacheResult;
use console::style;

/// Execute the remove command
pub async fn execute(args: RemoveArgs, cache: &LibraryCache) -> CacheResult<()> {
    let cache = cache.clone();
    let name = args.name.clone();
    if blocking(move || cache.remove(&name)).await? {
        println!("{} removed {}", style("✓").green(), args.name);
    } else {
        println!("{} is not cached.", args.name);
    }
    Ok(())
}
