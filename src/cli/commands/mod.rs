//! CLI command implementations

pub mod clean;
pub mod config;
pub mod dir;
pub mod exists;
pub mod import;
pub mod list;
pub mod remove;

pub use clean::execute as clean;
pub use config::execute as config;
pub use dir::{execute as dir, path};
pub use exists::{execute as exists, hash};
pub use import::execute as import;
pub use list::execute as list;
pub use remove::execute as remove;

use crate::error::{CacheError, CacheResult};

/// Run blocking cache work (hashing, copying) off the async runtime
pub(crate) async fn blocking<T, F>(f: F) -> CacheResult<T>
where
    F: FnOnce() -> CacheResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| CacheError::Task(e.to_string()))?
}
