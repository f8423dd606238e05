//! Import command - store a fetched image in the cache

use super::blocking;
use crate::cache::LibraryCache;
use crate::cli::args::ImportArgs;
use crate::error::{CacheError, CacheResult};
use console::style;

/// Execute the import command
pub async fn execute(args: ImportArgs, cache: &LibraryCache) -> CacheResult<()> {
    let name = match args.name {
        Some(name) => name,
        None => args
            .file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                CacheError::invalid(format!(
                    "cannot derive an image name from {}, pass --name",
                    args.file.display()
                ))
            })?,
    };

    let cache = cache.clone();
    let file = args.file;
    let image = blocking(move || cache.import(&file, &name)).await?;

    println!(
        "{} {} {}",
        style("✓").green(),
        image.name,
        style(&image.hash).dim()
    );
    println!("  {}", image.path.display());
    Ok(())
}
