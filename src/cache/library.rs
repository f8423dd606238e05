//! Library image store
//!
//! Images pulled from the remote library live at
//! `<cache root>/library/<name>`. Presence is decided by content hash, not
//! by file name alone: a file whose digest differs from the one the caller
//! expects is reported as not cached, exactly like a missing file. Callers
//! therefore have one decision to make ("fetch or reuse") and never see a
//! separate "corrupt entry" state.

use crate::cache::dir::CacheDir;
use crate::cache::hash::{ImageHasher, Sha256Hasher};
use crate::error::{CacheError, CacheResult};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Prefix of in-flight import files inside the library subtree
const TEMP_PREFIX: &str = ".sifcache-";

/// An image stored in the cache
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedImage {
    /// Content digest (`sha256.<hex>`)
    pub hash: String,
    /// Logical image name (file name under the library subtree)
    pub name: String,
    /// Absolute path of the cached file
    pub path: PathBuf,
}

/// A file found in the library subtree (not hash-verified)
#[derive(Debug, Clone, Serialize)]
pub struct CacheEntry {
    pub name: String,
    pub path: PathBuf,
    pub size_bytes: u64,
    pub modified: Option<DateTime<Utc>>,
}

/// Cache of library images with hash verification
#[derive(Clone)]
pub struct LibraryCache {
    dir: CacheDir,
    hasher: Arc<dyn ImageHasher>,
}

impl fmt::Debug for LibraryCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LibraryCache")
            .field("dir", &self.dir)
            .finish_non_exhaustive()
    }
}

/// Validate that an image name is a single plain file name
fn validate_name(name: &str) -> CacheResult<()> {
    if name.is_empty() {
        return Err(CacheError::invalid("image name cannot be empty"));
    }
    if name == "."
        || name == ".."
        || name.starts_with(TEMP_PREFIX)
        || name.contains(['/', '\\', '\0'])
    {
        return Err(CacheError::invalid(format!(
            "invalid image name '{}': must be a plain file name",
            name
        )));
    }
    Ok(())
}

impl LibraryCache {
    /// Create a cache using the SHA-256 hasher
    pub fn new(dir: CacheDir) -> Self {
        Self::with_hasher(dir, Sha256Hasher)
    }

    /// Create a cache with a custom hasher
    pub fn with_hasher(dir: CacheDir, hasher: impl ImageHasher + 'static) -> Self {
        Self {
            dir,
            hasher: Arc::new(hasher),
        }
    }

    /// The directory resolver backing this cache
    pub fn dir(&self) -> &CacheDir {
        &self.dir
    }

    /// Path where an image named `name` is (or would be) cached
    pub fn image_path(&self, name: &str) -> CacheResult<PathBuf> {
        validate_name(name)?;
        Ok(self.dir.library().join(name))
    }

    /// Create the library subtree if missing
    pub fn ensure_library(&self) -> CacheResult<PathBuf> {
        let library = self.dir.library();
        fs::create_dir_all(&library)
            .map_err(|e| CacheError::io("creating library cache directory", &library, e))?;
        Ok(library)
    }

    /// Check whether a valid copy of the image is cached
    ///
    /// Returns `Ok(false)` both when no file exists and when the file's
    /// digest does not match `hash`. Errors are reserved for invalid
    /// arguments and for an unusable cache (unreadable file, permission
    /// problems). Never modifies the cache.
    pub fn exists(&self, hash: &str, name: &str) -> CacheResult<bool> {
        if hash.is_empty() {
            return Err(CacheError::invalid("image hash cannot be empty"));
        }
        let path = self.image_path(name)?;

        let metadata = match fs::metadata(&path) {
            Ok(m) => m,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Image {} not in cache", name);
                return Ok(false);
            }
            Err(e) => return Err(CacheError::io("inspecting cached image", &path, e)),
        };

        if !metadata.is_file() {
            debug!("Cache path {} is not a regular file", path.display());
            return Ok(false);
        }

        let cached = self
            .hasher
            .hash_file(&path)
            .map_err(|e| CacheError::io("hashing cached image", &path, e))?;

        if cached != hash {
            debug!(
                "Cached image {} hash mismatch (expected {}, found {})",
                name, hash, cached
            );
            return Ok(false);
        }

        debug!("Using cached image {}", path.display());
        Ok(true)
    }

    /// Store `source` in the cache under `name`
    ///
    /// The file is copied to a temporary file inside the library subtree and
    /// renamed into place, so the final path only ever holds a complete
    /// image.
    pub fn import(&self, source: &Path, name: &str) -> CacheResult<CachedImage> {
        let dest = self.image_path(name)?;
        let library = self.ensure_library()?;

        let mut src = File::open(source)
            .map_err(|e| CacheError::io("opening image to import", source, e))?;

        let mut tmp = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .tempfile_in(&library)
            .map_err(|e| CacheError::io("creating temporary cache file", &library, e))?;

        io::copy(&mut src, tmp.as_file_mut())
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| CacheError::io("writing temporary cache file", tmp.path(), e))?;

        // Cached images are shared read-only artifacts
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = fs::Permissions::from_mode(0o644);
            fs::set_permissions(tmp.path(), perms)
                .map_err(|e| CacheError::io("setting cache file permissions", tmp.path(), e))?;
        }

        let hash = self
            .hasher
            .hash_file(tmp.path())
            .map_err(|e| CacheError::io("hashing imported image", tmp.path(), e))?;

        tmp.persist(&dest)
            .map_err(|e| CacheError::io("moving image into cache", &dest, e.error))?;

        info!("Cached {} as {}", name, hash);
        Ok(CachedImage {
            hash,
            name: name.to_string(),
            path: dest,
        })
    }

    /// List files in the library subtree, sorted by name
    pub fn entries(&self) -> CacheResult<Vec<CacheEntry>> {
        let library = self.dir.library();
        let read_dir = match fs::read_dir(&library) {
            Ok(rd) => rd,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(CacheError::io("reading library cache directory", &library, e)),
        };

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry =
                entry.map_err(|e| CacheError::io("reading library cache entry", &library, e))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with(TEMP_PREFIX) {
                continue;
            }

            let path = entry.path();
            let metadata = entry
                .metadata()
                .map_err(|e| CacheError::io("inspecting cached image", &path, e))?;
            if !metadata.is_file() {
                continue;
            }

            entries.push(CacheEntry {
                name,
                path,
                size_bytes: metadata.len(),
                modified: metadata.modified().ok().map(DateTime::<Utc>::from),
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    /// Remove a single cached image. Returns whether it was present.
    pub fn remove(&self, name: &str) -> CacheResult<bool> {
        let path = self.image_path(name)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                info!("Removed cached image {}", path.display());
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(CacheError::io("removing cached image", &path, e)),
        }
    }

    /// Remove the entire cache root
    ///
    /// A missing root is not an error. A failed removal may leave part of
    /// the tree behind; the error is returned as-is.
    pub fn clean(&self) -> CacheResult<()> {
        let root = self.dir.root();
        match fs::remove_dir_all(&root) {
            Ok(()) => {
                info!("Removed cache {}", root.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Cache {} does not exist, nothing to clean", root.display());
                Ok(())
            }
            Err(e) => Err(CacheError::io("removing cache directory", &root, e)),
        }
    }
}
