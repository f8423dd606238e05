//! Cache directory resolution
//!
//! Resolves the cache root and the `library` subtree beneath it. The
//! override is captured when the resolver is built; resolution itself is
//! pure path arithmetic and never touches the filesystem.

use std::env;
use std::path::PathBuf;
use tracing::debug;

/// Environment variable that redirects the whole cache tree
pub const DIR_ENV: &str = "SINGULARITY_CACHEDIR";

/// Name of the subtree holding library-sourced images
pub const LIBRARY_DIR: &str = "library";

/// Resolves the cache root, honoring an optional override
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheDir {
    override_root: Option<PathBuf>,
}

impl CacheDir {
    /// Create a resolver. `None` or an empty path means "use the default".
    pub fn new(override_root: Option<PathBuf>) -> Self {
        let override_root = override_root.filter(|p| !p.as_os_str().is_empty());
        Self { override_root }
    }

    /// Create a resolver that always uses the default base
    pub fn default_location() -> Self {
        Self::new(None)
    }

    /// Create a resolver from `SINGULARITY_CACHEDIR`, read once here
    pub fn from_env() -> Self {
        let value = env::var_os(DIR_ENV).map(PathBuf::from);
        if let Some(ref dir) = value {
            debug!("{} = {}", DIR_ENV, dir.display());
        }
        Self::new(value)
    }

    /// The default cache root: `~/.singularity/cache`
    pub fn default_root() -> PathBuf {
        dirs::home_dir()
            .filter(|home| home.is_absolute())
            .unwrap_or_else(env::temp_dir)
            .join(".singularity")
            .join("cache")
    }

    /// Whether an override is in effect
    pub fn is_overridden(&self) -> bool {
        self.override_root.is_some()
    }

    /// Resolve the cache root
    ///
    /// An absolute override is returned verbatim. A relative override is
    /// anchored at the current working directory.
    pub fn root(&self) -> PathBuf {
        match self.override_root {
            Some(ref dir) if dir.is_absolute() => dir.clone(),
            Some(ref dir) => std::path::absolute(dir).unwrap_or_else(|_| {
                env::current_dir()
                    .unwrap_or_else(|_| env::temp_dir())
                    .join(dir)
            }),
            None => Self::default_root(),
        }
    }

    /// Resolve the library subtree (`<root>/library`)
    pub fn library(&self) -> PathBuf {
        self.root().join(LIBRARY_DIR)
    }
}
