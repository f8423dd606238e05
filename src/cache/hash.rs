//! Image content hashing
//!
//! Digests use the library notation `sha256.<hex>`.

use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Prefix of every digest produced by [`Sha256Hasher`]
pub const DIGEST_PREFIX: &str = "sha256.";

/// Computes the content digest of an image file
///
/// Implementations must be deterministic and must only read the file.
pub trait ImageHasher: Send + Sync {
    fn hash_file(&self, path: &Path) -> io::Result<String>;
}

/// SHA-256 over the full file contents
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl ImageHasher for Sha256Hasher {
    fn hash_file(&self, path: &Path) -> io::Result<String> {
        let mut reader = BufReader::new(File::open(path)?);
        let mut hasher = Sha256::new();
        io::copy(&mut reader, &mut hasher)?;
        Ok(format!("{}{}", DIGEST_PREFIX, hex::encode(hasher.finalize())))
    }
}

/// Hash an image file with the default hasher
pub fn image_hash(path: &Path) -> io::Result<String> {
    Sha256Hasher.hash_file(path)
}
