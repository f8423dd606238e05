//! Dir and path commands - show where the cache lives

use crate::cache::LibraryCache;
use crate::cli::args::{DirArgs, PathArgs};
use crate::error::CacheResult;

/// Execute the dir command
pub async fn execute(args: DirArgs, cache: &LibraryCache) -> CacheResult<()> {
    let dir = if args.library {
        cache.dir().library()
    } else {
        cache.dir().root()
    };
    println!("{}", dir.display());
    Ok(())
}

/// Execute the path command
pub async fn path(args: PathArgs, cache: &LibraryCache) -> CacheResult<()> {
    println!("{}", cache.image_path(&args.name)?.display());
    Ok(())
}
