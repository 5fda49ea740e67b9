//! # Account Transaction Header
//!
//! The fixed-layout header every account transaction carries: sender,
//! sequence number, expiry, maximum energy, and payload size. Its bytes
//! prefix the payload bytes in both the signing digest and the submitted
//! transaction, so the serialization order here is a protocol contract.

use serde::{Deserialize, Serialize};

use crate::types::address::AccountAddress;
use crate::types::energy::EnergyAmount;
use crate::types::expiry::Expiry;
use crate::types::payload_size::PayloadSize;
use crate::types::sequence::SequenceNumber;

/// The header of an account transaction.
///
/// Immutable once constructed, and only the signing step constructs one —
/// the energy bound depends on the signer's key count, so no header can
/// exist before a signer is chosen.
///
/// ## Serialization order
///
/// `to_bytes()` emits {sender, sequence number, **energy**, **payload
/// size**, expiry} — note that energy and payload size come *before* expiry
/// even though the struct declares expiry third. The node signs and parses
/// exactly this order; do not "fix" it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountTransactionHeader {
    sender: AccountAddress,
    sequence_number: SequenceNumber,
    expiry: Expiry,
    max_energy_cost: EnergyAmount,
    payload_size: PayloadSize,
}

impl AccountTransactionHeader {
    /// Total serialized length: 32 + 8 + 8 + 4 + 8 = 60 bytes.
    pub const BYTES_LENGTH: usize = AccountAddress::BYTES_LENGTH
        + SequenceNumber::BYTES_LENGTH
        + EnergyAmount::BYTES_LENGTH
        + PayloadSize::BYTES_LENGTH
        + Expiry::BYTES_LENGTH;

    /// Assembles a header. Crate-private: headers are materialized by
    /// [`crate::transactions::signing::sign_transaction`] only.
    pub(crate) fn new(
        sender: AccountAddress,
        sequence_number: SequenceNumber,
        expiry: Expiry,
        max_energy_cost: EnergyAmount,
        payload_size: PayloadSize,
    ) -> Self {
        Self {
            sender,
            sequence_number,
            expiry,
            max_energy_cost,
            payload_size,
        }
    }

    /// Address of the transaction sender.
    pub fn sender(&self) -> &AccountAddress {
        &self.sender
    }

    /// Account sequence number used by the transaction.
    pub fn sequence_number(&self) -> SequenceNumber {
        self.sequence_number
    }

    /// Expiration time of the transaction.
    pub fn expiry(&self) -> Expiry {
        self.expiry
    }

    /// Maximum energy the transaction may spend.
    pub fn max_energy_cost(&self) -> EnergyAmount {
        self.max_energy_cost
    }

    /// Serialized byte length of the payload.
    pub fn payload_size(&self) -> PayloadSize {
        self.payload_size
    }

    /// The header in the binary format expected by the node.
    ///
    /// Pure and total: always exactly [`BYTES_LENGTH`](Self::BYTES_LENGTH)
    /// bytes, in the fixed field order described on the type.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(Self::BYTES_LENGTH);
        buf.extend_from_slice(self.sender.as_bytes());
        buf.extend_from_slice(&self.sequence_number.to_bytes());
        buf.extend_from_slice(&self.max_energy_cost.to_bytes());
        buf.extend_from_slice(&self.payload_size.to_bytes());
        buf.extend_from_slice(&self.expiry.to_bytes());
        buf
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
