//! sifcache - Local cache for library container images
//!
//! Resolves the cache directory, addresses cached images by name and
//! verifies them by content hash before they are reused.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;

pub use cache::{CacheDir, CachedImage, ImageHasher, LibraryCache, Sha256Hasher};
pub use error::{CacheError, CacheResult, ErrorKind};
