//! # Account Sequence Numbers
//!
//! A per-account, strictly increasing counter that prevents replay. The
//! first valid sequence number on chain is 1 — zero is rejected at
//! construction so it cannot leak into a header. Whether a given number
//! matches the account's next expected value is the node's check, not ours.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::codec;
use crate::config::SEQUENCE_NUMBER_BYTES_LENGTH;

/// Errors from sequence number construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    /// Zero is not a valid account sequence number.
    #[error("sequence numbers start at 1; got 0")]
    Zero,

    /// The counter cannot advance past `u64::MAX`.
    #[error("sequence number space exhausted at {0}")]
    Exhausted(u64),

    /// The input string is not a positive integer.
    #[error("could not parse {0:?} as a sequence number")]
    Parse(String),
}

/// An account sequence number (a.k.a. nonce). Serializes to 8 big-endian
/// bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SequenceNumber {
    value: u64,
}

impl SequenceNumber {
    /// Serialized width in bytes.
    pub const BYTES_LENGTH: usize = SEQUENCE_NUMBER_BYTES_LENGTH;

    /// The first sequence number of a fresh account.
    pub const MIN: SequenceNumber = SequenceNumber { value: 1 };

    /// Creates a sequence number, rejecting zero.
    pub fn new(value: u64) -> Result<Self, SequenceError> {
        if value == 0 {
            return Err(SequenceError::Zero);
        }
        Ok(Self { value })
    }

    /// The raw counter value.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// The next sequence number after this one.
    ///
    /// Fails only at `u64::MAX`, which no account will reach honestly.
    pub fn next(&self) -> Result<SequenceNumber, SequenceError> {
        self.value
            .checked_add(1)
            .map(|value| SequenceNumber { value })
            .ok_or(SequenceError::Exhausted(self.value))
    }

    /// The sequence number in the 8-byte big-endian wire format.
    pub fn to_bytes(&self) -> [u8; 8] {
        codec::encode_u64(self.value)
    }
}

impl FromStr for SequenceNumber {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .parse::<u64>()
            .map_err(|_| SequenceError::Parse(s.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for SequenceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_rejected() {
        assert_eq!(SequenceNumber::new(0), Err(SequenceError::Zero));
        assert!(SequenceNumber::new(1).is_ok());
    }

    #[test]
    fn next_increments() {
        let n = SequenceNumber::new(123).unwrap();
        assert_eq!(n.next().unwrap().value(), 124);
    }

    #[test]
    fn next_fails_at_max() {
        let n = SequenceNumber::new(u64::MAX).unwrap();
        assert_eq!(n.next(), Err(SequenceError::Exhausted(u64::MAX)));
    }

    #[test]
    fn encoding_is_eight_big_endian_bytes() {
        let n = SequenceNumber::new(123).unwrap();
        assert_eq!(n.to_bytes(), [0, 0, 0, 0, 0, 0, 0, 123]);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("123".parse::<SequenceNumber>().is_ok());
        assert_eq!(
            "0".parse::<SequenceNumber>(),
            Err(SequenceError::Zero)
        );
        assert!("abc".parse::<SequenceNumber>().is_err());
    }
}
