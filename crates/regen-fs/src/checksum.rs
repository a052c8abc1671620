//! SHA-256 checksum utilities
//!
//! Checksums are rendered as bare lower-case hex. They depend on content
//! only: mtime, permissions and other metadata never contribute.

use sha2::{Digest, Sha256};
use std::fs::File;
use std::io;
use std::path::Path;

use crate::{Error, Result};

/// Compute the SHA-256 checksum of in-memory content.
pub fn compute_content_checksum(content: impl AsRef<[u8]>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_ref());
    format!("{:x}", hasher.finalize())
}

/// Compute the SHA-256 checksum of a file's contents.
///
/// The file is streamed through the hasher rather than read into memory,
/// so large generated artifacts are fine.
///
/// # Errors
///
/// Returns an error naming the path if the file cannot be opened or read.
pub fn compute_file_checksum(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher).map_err(|e| Error::io(path, e))?;
    Ok(format!("{:x}", hasher.finalize()))
}
