//! Exists and hash commands - verify cached images

use super::blocking;
use crate::cache::{image_hash, LibraryCache};
use crate::cli::args::{ExistsArgs, HashArgs};
use crate::error::{CacheError, CacheResult};
use tracing::debug;

/// Execute the exists command, returning whether the image is cached
pub async fn execute(args: ExistsArgs, cache: &LibraryCache) -> CacheResult<bool> {
    let cache = cache.clone();
    let ExistsArgs { hash, name } = args;

    let found = blocking(move || cache.exists(&hash, &name)).await?;
    debug!("exists = {}", found);

    println!("{}", found);
    Ok(found)
}

/// Execute the hash command
pub async fn hash(args: HashArgs) -> CacheResult<()> {
    let file = args.file;
    let digest = blocking(move || {
        image_hash(&file).map_err(|e| CacheError::io("hashing image", &file, e))
    })
    .await?;

    println!("{}", digest);
    Ok(())
}
