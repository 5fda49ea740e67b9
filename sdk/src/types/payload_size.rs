//! # Payload Size
//!
//! The exact serialized byte length of a transaction's payload, as recorded
//! in the header. Never set by hand — always derived from the bytes the
//! payload actually serialized to, which is why the constructor is
//! crate-private.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::codec;
use crate::config::PAYLOAD_SIZE_BYTES_LENGTH;

/// The serialized byte length of a transaction payload. Serializes to
/// 4 big-endian bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PayloadSize {
    size: u32,
}

impl PayloadSize {
    /// Serialized width in bytes.
    pub const BYTES_LENGTH: usize = PAYLOAD_SIZE_BYTES_LENGTH;

    /// Derives the size from serialized payload bytes. Crate-private:
    /// the signing step is the only producer.
    pub(crate) fn of(serialized_payload: &[u8]) -> Self {
        Self {
            size: serialized_payload.len() as u32,
        }
    }

    /// The size in bytes.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// The size in the 4-byte big-endian wire format.
    pub fn to_bytes(&self) -> [u8; 4] {
        codec::encode_u32(self.size)
    }
}

impl fmt::Display for PayloadSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bytes", self.size)
    }
}
