//! # CCD Amounts
//!
//! A [`CcdAmount`] is a quantity of µCCD held in a `u64`. One CCD is
//! 1_000_000 µCCD, and every protocol operation — serialization, fee math,
//! balance arithmetic — happens in µCCD.
//!
//! No floating point anywhere near money, and no silent wrapping either:
//! all arithmetic is checked and surfaces overflow as an [`AmountError`] at
//! the call site. The operands are `Copy` values, so a failed operation
//! leaves nothing half-mutated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::codec;
use crate::config::{CCD_AMOUNT_BYTES_LENGTH, MICRO_CCD_PER_CCD};

/// Errors from amount construction and arithmetic.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    /// Converting whole CCD to µCCD left the u64 range.
    #[error("{ccd} CCD exceeds the representable µCCD range")]
    CcdOverflow { ccd: u64 },

    /// Addition left the u64 range.
    #[error("amount overflow: {lhs} µCCD + {rhs} µCCD exceeds u64")]
    AddOverflow { lhs: u64, rhs: u64 },

    /// Subtraction went below zero.
    #[error("amount underflow: {lhs} µCCD - {rhs} µCCD is negative")]
    SubtractUnderflow { lhs: u64, rhs: u64 },

    /// Scaling left the u64 range.
    #[error("amount overflow: {lhs} µCCD * {factor} exceeds u64")]
    MulOverflow { lhs: u64, factor: u64 },

    /// The input string is not a non-negative integer number of µCCD.
    #[error("could not parse {0:?} as a µCCD amount")]
    Parse(String),
}

/// An amount of CCD, stored in µCCD.
///
/// Serializes to exactly 8 big-endian bytes. Construction is total from
/// µCCD ([`from_micro_ccd`](Self::from_micro_ccd)) and checked from whole
/// CCD ([`from_ccd`](Self::from_ccd)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CcdAmount {
    micro_ccd: u64,
}

impl CcdAmount {
    /// Serialized width in bytes.
    pub const BYTES_LENGTH: usize = CCD_AMOUNT_BYTES_LENGTH;

    /// Zero µCCD.
    pub const ZERO: CcdAmount = CcdAmount { micro_ccd: 0 };

    /// Creates an amount from µCCD. Always succeeds — every u64 is a valid
    /// µCCD quantity.
    pub fn from_micro_ccd(micro_ccd: u64) -> Self {
        Self { micro_ccd }
    }

    /// Creates an amount from whole CCD.
    ///
    /// Fails if `ccd * 1_000_000` does not fit in a u64.
    pub fn from_ccd(ccd: u64) -> Result<Self, AmountError> {
        let micro_ccd = ccd
            .checked_mul(MICRO_CCD_PER_CCD)
            .ok_or(AmountError::CcdOverflow { ccd })?;
        Ok(Self { micro_ccd })
    }

    /// The amount in µCCD.
    pub fn micro_ccd(&self) -> u64 {
        self.micro_ccd
    }

    /// Checked addition. Fails with [`AmountError::AddOverflow`] rather than
    /// wrapping.
    pub fn checked_add(self, other: CcdAmount) -> Result<CcdAmount, AmountError> {
        self.micro_ccd
            .checked_add(other.micro_ccd)
            .map(CcdAmount::from_micro_ccd)
            .ok_or(AmountError::AddOverflow {
                lhs: self.micro_ccd,
                rhs: other.micro_ccd,
            })
    }

    /// Checked subtraction. Fails with [`AmountError::SubtractUnderflow`]
    /// if `other` is larger than `self`.
    pub fn checked_sub(self, other: CcdAmount) -> Result<CcdAmount, AmountError> {
        self.micro_ccd
            .checked_sub(other.micro_ccd)
            .map(CcdAmount::from_micro_ccd)
            .ok_or(AmountError::SubtractUnderflow {
                lhs: self.micro_ccd,
                rhs: other.micro_ccd,
            })
    }

    /// Checked scaling by an integer factor.
    pub fn checked_mul(self, factor: u64) -> Result<CcdAmount, AmountError> {
        self.micro_ccd
            .checked_mul(factor)
            .map(CcdAmount::from_micro_ccd)
            .ok_or(AmountError::MulOverflow {
                lhs: self.micro_ccd,
                factor,
            })
    }

    /// The amount in the 8-byte big-endian wire format.
    pub fn to_bytes(&self) -> [u8; 8] {
        codec::encode_u64(self.micro_ccd)
    }

    /// Decodes an amount from its 8-byte big-endian wire format.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, codec::CodecError> {
        codec::decode_u64(bytes).map(Self::from_micro_ccd)
    }
}

impl FromStr for CcdAmount {
    type Err = AmountError;

    /// Parses a µCCD amount from a decimal string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(Self::from_micro_ccd)
            .map_err(|_| AmountError::Parse(s.to_string()))
    }
}

impl fmt::Display for CcdAmount {
    /// Renders as decimal CCD, e.g. `10.000000 CCD` for 10_000_000 µCCD.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.micro_ccd / MICRO_CCD_PER_CCD;
        let frac = self.micro_ccd % MICRO_CCD_PER_CCD;
        write!(f, "{whole}.{frac:06} CCD")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_ccd_converts_exactly() {
        assert_eq!(CcdAmount::from_ccd(10).unwrap().micro_ccd(), 10_000_000);
        assert_eq!(CcdAmount::from_ccd(0).unwrap().micro_ccd(), 0);
    }

    #[test]
    fn from_ccd_boundary() {
        // Largest whole-CCD value that still fits in u64 µCCD.
        let max_ccd = u64::MAX / MICRO_CCD_PER_CCD;
        assert!(CcdAmount::from_ccd(max_ccd).is_ok());
        assert_eq!(
            CcdAmount::from_ccd(max_ccd + 1),
            Err(AmountError::CcdOverflow { ccd: max_ccd + 1 })
        );
    }

    #[test]
    fn checked_add_exact_or_error() {
        let a = CcdAmount::from_micro_ccd(1);
        let b = CcdAmount::from_micro_ccd(2);
        assert_eq!(a.checked_add(b).unwrap().micro_ccd(), 3);

        let max = CcdAmount::from_micro_ccd(u64::MAX);
        assert_eq!(
            max.checked_add(a),
            Err(AmountError::AddOverflow {
                lhs: u64::MAX,
                rhs: 1
            })
        );
    }

    #[test]
    fn checked_sub_exact_or_error() {
        let a = CcdAmount::from_micro_ccd(5);
        let b = CcdAmount::from_micro_ccd(3);
        assert_eq!(a.checked_sub(b).unwrap().micro_ccd(), 2);
        assert_eq!(
            b.checked_sub(a),
            Err(AmountError::SubtractUnderflow { lhs: 3, rhs: 5 })
        );
    }

    #[test]
    fn checked_mul_exact_or_error() {
        let a = CcdAmount::from_micro_ccd(1_000);
        assert_eq!(a.checked_mul(3).unwrap().micro_ccd(), 3_000);
        assert!(CcdAmount::from_micro_ccd(u64::MAX).checked_mul(2).is_err());
    }

    #[test]
    fn failed_arithmetic_leaves_operands_unchanged() {
        let max = CcdAmount::from_micro_ccd(u64::MAX);
        let one = CcdAmount::from_micro_ccd(1);
        let _ = max.checked_add(one);
        assert_eq!(max.micro_ccd(), u64::MAX);
        assert_eq!(one.micro_ccd(), 1);
    }

    #[test]
    fn encoding_is_eight_big_endian_bytes() {
        let amount = CcdAmount::from_micro_ccd(4_294_967_296);
        assert_eq!(amount.to_bytes(), [0, 0, 0, 1, 0, 0, 0, 0]);
        assert_eq!(amount.to_bytes().len(), CcdAmount::BYTES_LENGTH);
    }

    #[test]
    fn bytes_roundtrip() {
        for v in [0, 1, 10_000_000, u64::MAX] {
            let amount = CcdAmount::from_micro_ccd(v);
            assert_eq!(CcdAmount::from_bytes(&amount.to_bytes()).unwrap(), amount);
        }
    }

    #[test]
    fn parse_micro_ccd_string() {
        assert_eq!(
            "10000000".parse::<CcdAmount>().unwrap(),
            CcdAmount::from_micro_ccd(10_000_000)
        );
        assert!("ten".parse::<CcdAmount>().is_err());
        assert!("-1".parse::<CcdAmount>().is_err());
    }

    #[test]
    fn display_formats_as_ccd() {
        assert_eq!(CcdAmount::from_micro_ccd(10_000_000).to_string(), "10.000000 CCD");
        assert_eq!(CcdAmount::from_micro_ccd(1).to_string(), "0.000001 CCD");
    }
}
