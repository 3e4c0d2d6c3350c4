//! Content and file hashing helpers (SHA-256, hex-encoded).
//!
//! Mirrors the conventions in `mcb_domain::utils::id` but lives here so
//! crates below the domain layer (providers, infrastructure) can hash
//! without depending on `mcb-domain`.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{Result, UtilsError};

/// SHA-256 hex digest of in-memory content.
#[must_use]
pub fn content_hash(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}

/// SHA-256 hex digest of a UTF-8 string's bytes.
#[must_use]
pub fn content_hash_str(content: &str) -> String {
    content_hash(content.as_bytes())
}

/// SHA-256 hex digest of a file's contents, streamed in 8 KiB chunks so
/// large files never need to be fully materialized in memory.
///
/// # Errors
///
/// Returns [`UtilsError::Io`] if the file cannot be opened or read.
pub fn file_hash(path: &Path) -> Result<String> {
    let file = File::open(path)
        .map_err(|e| UtilsError::io(format!("failed to open file {}", path.display()), e))?;
    let mut reader = BufReader::new(file);
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];
    loop {
        let count = reader
            .read(&mut buffer)
            .map_err(|e| UtilsError::io(format!("failed to read file {}", path.display()), e))?;
        if count == 0 {
            break;
        }
        hasher.update(&buffer[..count]);
    }
    Ok(hex::encode(hasher.finalize()))
}
