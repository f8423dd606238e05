//! Local cache for library images
//!
//! Images fetched from the remote library are stored under a deterministic
//! path and verified by content hash before reuse.
//!
//! # Layout
//!
//! ```text
//! $SINGULARITY_CACHEDIR (or ~/.singularity/cache)
//! └── library/
//!     └── <name>          # e.g. ubuntu_latest.sif
//! ```
//!
//! # Entry States
//!
//! | State | `exists` | Description |
//! |-------|----------|-------------|
//! | Absent | false | No file at the derived path |
//! | Invalid | false | File present, digest differs from expected |
//! | Valid | true | File present, digest matches |

pub mod dir;
pub mod hash;
pub mod library;

pub use dir::{CacheDir, DIR_ENV, LIBRARY_DIR};
pub use hash::{image_hash, ImageHasher, Sha256Hasher};
pub use library::{CacheEntry, CachedImage, LibraryCache};
