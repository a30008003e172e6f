//! Reproducible subset selection for large codebases.
//!
//! Selection is keyed on SHA-256 of the path, never on a random source, so
//! identical inputs always pick identical files and identifiers.

pub mod files;
pub mod identifiers;

use sha2::{Digest, Sha256};

pub use files::select_files;
pub use identifiers::select_identifiers_for_file;

/// Integer seed for a path: the first 8 hex digits of its SHA-256 digest.
pub fn seed(path: &str) -> u32 {
    let digest = Sha256::digest(path.as_bytes());
    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{digest:x}")
}
