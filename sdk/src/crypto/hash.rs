//! # Hashing
//!
//! The protocol signs a SHA-256 digest over the serialized header and
//! payload. That is the only place hashing appears in this crate, and
//! SHA-256 is the only function the node accepts for it, so this module is
//! intentionally tiny.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of the input data as a `Vec<u8>`.
///
/// Returns a 32-byte digest. Use [`sha256_array`] when the fixed-size type
/// propagates naturally (the signing path does).
pub fn sha256(data: &[u8]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}

/// Compute the SHA-256 hash and return a fixed-size array.
///
/// This is the form the signing digest takes: exactly 32 bytes, no heap.
pub fn sha256_array(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}
