//! # Energy Amounts
//!
//! Energy bounds the computational and storage cost a transaction may
//! consume. The header carries a maximum energy figure computed by the cost
//! module at sign time; the node rejects the transaction if execution would
//! exceed it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::codec;
use crate::config::ENERGY_AMOUNT_BYTES_LENGTH;
use crate::types::amount::AmountError;

/// An amount of energy. Serializes to 8 big-endian bytes.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EnergyAmount {
    energy: u64,
}

impl EnergyAmount {
    /// Serialized width in bytes.
    pub const BYTES_LENGTH: usize = ENERGY_AMOUNT_BYTES_LENGTH;

    /// Creates an energy amount. Total — every u64 is valid energy.
    pub fn new(energy: u64) -> Self {
        Self { energy }
    }

    /// The raw energy value.
    pub fn energy(&self) -> u64 {
        self.energy
    }

    /// Checked addition, for callers composing cost figures outside the
    /// calculator. Fails explicitly rather than wrapping.
    pub fn checked_add(self, other: EnergyAmount) -> Result<EnergyAmount, AmountError> {
        self.energy
            .checked_add(other.energy)
            .map(EnergyAmount::new)
            .ok_or(AmountError::AddOverflow {
                lhs: self.energy,
                rhs: other.energy,
            })
    }

    /// The energy amount in the 8-byte big-endian wire format.
    pub fn to_bytes(&self) -> [u8; 8] {
        codec::encode_u64(self.energy)
    }

    /// Decodes an energy amount from its 8-byte big-endian wire format.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, codec::CodecError> {
        codec::decode_u64(bytes).map(Self::new)
    }
}

impl From<u64> for EnergyAmount {
    fn from(energy: u64) -> Self {
        Self::new(energy)
    }
}

impl fmt::Display for EnergyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} NRG", self.energy)
    }
}
