//! # Transaction Payloads
//!
//! The operation-specific half of a transaction. The signing pipeline needs
//! exactly two things from a payload — its serialized bytes and its
//! protocol-assigned base energy cost — so that is the whole trait. Payload
//! kinds defined outside this crate implement
//! [`AccountTransactionPayload`] and flow through prepare/sign unchanged.
//!
//! Every serialized payload starts with a tag byte identifying its kind;
//! the tag values and base costs are protocol constants in
//! [`crate::config`].

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::codec;
use crate::config::{
    MAX_MEMO_BYTES_LENGTH, MAX_REGISTERED_DATA_BYTES_LENGTH, REGISTER_DATA_BASE_COST,
    REGISTER_DATA_PAYLOAD_TAG, TRANSFER_BASE_COST, TRANSFER_PAYLOAD_TAG,
    TRANSFER_WITH_MEMO_BASE_COST, TRANSFER_WITH_MEMO_PAYLOAD_TAG,
};
use crate::transactions::prepare::PreparedAccountTransaction;
use crate::types::address::AccountAddress;
use crate::types::amount::CcdAmount;
use crate::types::energy::EnergyAmount;
use crate::types::expiry::Expiry;
use crate::types::sequence::SequenceNumber;

/// Errors from payload value construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayloadError {
    /// A memo exceeded the protocol cap.
    #[error("memo is {actual} bytes; the maximum is {MAX_MEMO_BYTES_LENGTH}")]
    MemoTooLarge { actual: usize },

    /// Registered data exceeded the protocol cap.
    #[error("registered data is {actual} bytes; the maximum is {MAX_REGISTERED_DATA_BYTES_LENGTH}")]
    DataTooLarge { actual: usize },

    /// The hex input for a memo or data value did not decode.
    #[error("invalid hex: {0:?}")]
    InvalidHex(String),
}

// ---------------------------------------------------------------------------
// The capability contract
// ---------------------------------------------------------------------------

/// What the signing pipeline requires of a payload.
///
/// Both operations are deterministic and total: a constructed payload
/// always serializes, and its cost is a constant of its kind. Anything that
/// can fail (size caps, hex parsing) fails earlier, when the payload's
/// component values are constructed.
pub trait AccountTransactionPayload {
    /// The payload in the binary format expected by the node, tag byte
    /// first.
    fn to_bytes(&self) -> Vec<u8>;

    /// The transaction-specific base energy cost of this payload kind,
    /// before the per-signature and per-byte terms.
    fn transaction_specific_cost(&self) -> EnergyAmount;

    /// Stages this payload for signing together with the sender, sequence
    /// number, and expiry. Sugar for [`PreparedAccountTransaction::new`].
    fn prepare(
        self,
        sender: AccountAddress,
        sequence_number: SequenceNumber,
        expiry: Expiry,
    ) -> PreparedAccountTransaction<Self>
    where
        Self: Sized,
    {
        PreparedAccountTransaction::new(sender, sequence_number, expiry, self)
    }
}

// ---------------------------------------------------------------------------
// Capped byte containers
// ---------------------------------------------------------------------------

/// A transfer memo: at most 256 bytes, serialized with a u16 big-endian
/// length prefix. The chain stores it but assigns it no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memo {
    bytes: Vec<u8>,
}

impl Memo {
    /// Creates a memo, enforcing the size cap.
    pub fn try_from_bytes(bytes: Vec<u8>) -> Result<Self, PayloadError> {
        if bytes.len() > MAX_MEMO_BYTES_LENGTH {
            return Err(PayloadError::MemoTooLarge {
                actual: bytes.len(),
            });
        }
        Ok(Self { bytes })
    }

    /// Creates a memo from hex-encoded content.
    pub fn from_hex(s: &str) -> Result<Self, PayloadError> {
        let bytes = hex::decode(s).map_err(|_| PayloadError::InvalidHex(s.to_string()))?;
        Self::try_from_bytes(bytes)
    }

    /// The memo content.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length-prefixed wire form: u16 BE length, then the content.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(2 + self.bytes.len());
        buf.extend_from_slice(&codec::encode_u16(self.bytes.len() as u16));
        buf.extend_from_slice(&self.bytes);
        buf
    }
}

impl fmt::Display for Memo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.bytes))
    }
}

/// Data registered on chain: at most 256 bytes, serialized with a u16
/// big-endian length prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredData {
    bytes: Vec<u8>,
}

impl RegisteredData {
    /// Creates a data value, enforcing the size cap.
    pub fn try_from_bytes(bytes: Vec<u8>) -> Result<Self, PayloadError> {
        if bytes.len() > MAX_REGISTERED_DATA_BYTES_LENGTH {
            return Err(PayloadError::DataTooLarge {
                actual: bytes.len(),
            });
        }
        Ok(Self { bytes })
    }

    /// Creates a data value from hex-encoded content.
    pub fn from_hex(s: &str) -> Result<Self, PayloadError> {
        let bytes = hex::decode(s).map_err(|_| PayloadError::InvalidHex(s.to_string()))?;
        Self::try_from_bytes(bytes)
    }

    /// The data content.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length-prefixed wire form: u16 BE length, then the content.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(2 + self.bytes.len());
        buf.extend_from_slice(&codec::encode_u16(self.bytes.len() as u16));
        buf.extend_from_slice(&self.bytes);
        buf
    }
}

impl fmt::Display for RegisteredData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.bytes))
    }
}

// ---------------------------------------------------------------------------
// Payload kinds
// ---------------------------------------------------------------------------

/// A plain CCD transfer to another account.
///
/// Wire form: tag 3, receiver address (32 bytes), amount (8 bytes BE).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub receiver: AccountAddress,
    pub amount: CcdAmount,
}

impl Transfer {
    pub fn new(receiver: AccountAddress, amount: CcdAmount) -> Self {
        Self { receiver, amount }
    }
}

impl AccountTransactionPayload for Transfer {
    fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(1 + AccountAddress::BYTES_LENGTH + CcdAmount::BYTES_LENGTH);
        buf.push(TRANSFER_PAYLOAD_TAG);
        buf.extend_from_slice(self.receiver.as_bytes());
        buf.extend_from_slice(&self.amount.to_bytes());
        buf
    }

    fn transaction_specific_cost(&self) -> EnergyAmount {
        EnergyAmount::new(TRANSFER_BASE_COST)
    }
}

/// A CCD transfer carrying a memo.
///
/// Wire form: tag 22, receiver address, length-prefixed memo, amount.
/// The memo sits *between* receiver and amount; the node parses exactly
/// this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferWithMemo {
    pub receiver: AccountAddress,
    pub memo: Memo,
    pub amount: CcdAmount,
}

impl TransferWithMemo {
    pub fn new(receiver: AccountAddress, memo: Memo, amount: CcdAmount) -> Self {
        Self {
            receiver,
            memo,
            amount,
        }
    }
}

impl AccountTransactionPayload for TransferWithMemo {
    fn to_bytes(&self) -> Vec<u8> {
        let memo_bytes = self.memo.to_bytes();
        let mut buf = Vec::with_capacity(
            1 + AccountAddress::BYTES_LENGTH + memo_bytes.len() + CcdAmount::BYTES_LENGTH,
        );
        buf.push(TRANSFER_WITH_MEMO_PAYLOAD_TAG);
        buf.extend_from_slice(self.receiver.as_bytes());
        buf.extend_from_slice(&memo_bytes);
        buf.extend_from_slice(&self.amount.to_bytes());
        buf
    }

    fn transaction_specific_cost(&self) -> EnergyAmount {
        EnergyAmount::new(TRANSFER_WITH_MEMO_BASE_COST)
    }
}

/// Registers a piece of data on the chain.
///
/// Wire form: tag 21, length-prefixed data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterData {
    pub data: RegisteredData,
}

impl RegisterData {
    pub fn new(data: RegisteredData) -> Self {
        Self { data }
    }
}

impl AccountTransactionPayload for RegisterData {
    fn to_bytes(&self) -> Vec<u8> {
        let data_bytes = self.data.to_bytes();
        let mut buf = Vec::with_capacity(1 + data_bytes.len());
        buf.push(REGISTER_DATA_PAYLOAD_TAG);
        buf.extend_from_slice(&data_bytes);
        buf
    }

    fn transaction_specific_cost(&self) -> EnergyAmount {
        EnergyAmount::new(REGISTER_DATA_BASE_COST)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
