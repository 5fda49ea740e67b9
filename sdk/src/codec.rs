//! # Fixed-Width Big-Endian Codec
//!
//! The wire format is big-endian with fixed widths, full stop. These helpers
//! are pure functions: every valid value has exactly one encoding, encoding
//! never fails, and decoding fails only on a wrong input length.
//!
//! Higher-level types (`CcdAmount`, `SequenceNumber`, ...) call into this
//! module from their `to_bytes`/`from_bytes` so that the endianness decision
//! is made in exactly one place.

use thiserror::Error;

/// Errors from decoding fixed-width values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// The input slice is not the exact width of the target type.
    #[error("expected exactly {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Encodes a `u64` as 8 big-endian bytes.
pub fn encode_u64(value: u64) -> [u8; 8] {
    value.to_be_bytes()
}

/// Encodes a `u32` as 4 big-endian bytes.
pub fn encode_u32(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Encodes a `u16` as 2 big-endian bytes.
pub fn encode_u16(value: u16) -> [u8; 2] {
    value.to_be_bytes()
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Decodes 8 big-endian bytes into a `u64`.
pub fn decode_u64(bytes: &[u8]) -> Result<u64, CodecError> {
    let arr: [u8; 8] = bytes.try_into().map_err(|_| CodecError::InvalidLength {
        expected: 8,
        actual: bytes.len(),
    })?;
    Ok(u64::from_be_bytes(arr))
}

/// Decodes 4 big-endian bytes into a `u32`.
pub fn decode_u32(bytes: &[u8]) -> Result<u32, CodecError> {
    let arr: [u8; 4] = bytes.try_into().map_err(|_| CodecError::InvalidLength {
        expected: 4,
        actual: bytes.len(),
    })?;
    Ok(u32::from_be_bytes(arr))
}

/// Decodes 2 big-endian bytes into a `u16`.
pub fn decode_u16(bytes: &[u8]) -> Result<u16, CodecError> {
    let arr: [u8; 2] = bytes.try_into().map_err(|_| CodecError::InvalidLength {
        expected: 2,
        actual: bytes.len(),
    })?;
    Ok(u16::from_be_bytes(arr))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u64_encoding_is_big_endian() {
        // 2^32 must land in the upper half of the 8-byte word.
        assert_eq!(encode_u64(4_294_967_296), [0, 0, 0, 1, 0, 0, 0, 0]);
        assert_eq!(encode_u64(0), [0; 8]);
        assert_eq!(encode_u64(u64::MAX), [0xFF; 8]);
    }

    #[test]
    fn u32_encoding_is_big_endian() {
        assert_eq!(encode_u32(1), [0, 0, 0, 1]);
        assert_eq!(encode_u32(0x0102_0304), [1, 2, 3, 4]);
    }

    #[test]
    fn u16_encoding_is_big_endian() {
        assert_eq!(encode_u16(4), [0, 4]);
        assert_eq!(encode_u16(0xFEED), [0xFE, 0xED]);
    }

    #[test]
    fn roundtrip_u64() {
        for v in [0, 1, 123, 4_294_967_296, u64::MAX] {
            assert_eq!(decode_u64(&encode_u64(v)).unwrap(), v);
        }
    }

    #[test]
    fn roundtrip_u32() {
        for v in [0, 1, 60, u32::MAX] {
            assert_eq!(decode_u32(&encode_u32(v)).unwrap(), v);
        }
    }

    #[test]
    fn roundtrip_u16() {
        for v in [0, 4, 256, u16::MAX] {
            assert_eq!(decode_u16(&encode_u16(v)).unwrap(), v);
        }
    }

    #[test]
    fn decode_rejects_wrong_length() {
        assert_eq!(
            decode_u64(&[0; 7]),
            Err(CodecError::InvalidLength {
                expected: 8,
                actual: 7
            })
        );
        assert_eq!(
            decode_u32(&[0; 8]),
            Err(CodecError::InvalidLength {
                expected: 4,
                actual: 8
            })
        );
        assert_eq!(
            decode_u16(&[]),
            Err(CodecError::InvalidLength {
                expected: 2,
                actual: 0
            })
        );
    }
}
