//! Digest helpers
//!
//! Thin wrappers over `sha2` returning fixed-size arrays. SHA-256 names
//! DataItems and bundle index entries; SHA-384 exists solely for the
//! Arweave deep-hash construction.

use sha2::{Digest, Sha256, Sha384};

/// SHA-256 of `bytes`
pub fn sha256(bytes: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Sha256::digest(bytes));
    out
}

/// SHA-384 of `bytes`
pub fn sha384(bytes: &[u8]) -> [u8; 48] {
    let mut out = [0u8; 48];
    out.copy_from_slice(&Sha384::digest(bytes));
    out
}
