//! # Signed Transactions
//!
//! The final artifact: header, payload, and the keyed signature map,
//! bundled for hand-off to whatever transport submits transactions to the
//! node. Immutable — there is no way to add signatures or re-prepare; a new
//! sign call re-derives everything from scratch.

use serde::{Deserialize, Serialize};

use crate::crypto::hash::sha256_array;
use crate::transactions::header::AccountTransactionHeader;
use crate::transactions::payload::AccountTransactionPayload;
use crate::transactions::signature::AccountTransactionSignature;

/// A fully signed account transaction.
///
/// The transport layer consumes this as {header bytes ++ payload bytes,
/// signature map}; serializing the signature map into the node's message
/// structure is the transport's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedAccountTransaction<P> {
    header: AccountTransactionHeader,
    payload: P,
    signature: AccountTransactionSignature,
}

impl<P: AccountTransactionPayload> SignedAccountTransaction<P> {
    /// Bundles the pieces. Crate-private: only the signing step produces
    /// signed transactions.
    pub(crate) fn new(
        header: AccountTransactionHeader,
        payload: P,
        signature: AccountTransactionSignature,
    ) -> Self {
        Self {
            header,
            payload,
            signature,
        }
    }

    /// The materialized header.
    pub fn header(&self) -> &AccountTransactionHeader {
        &self.header
    }

    /// The signed payload.
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// The signature map.
    pub fn signature(&self) -> &AccountTransactionSignature {
        &self.signature
    }

    /// The header's wire bytes — always exactly
    /// [`AccountTransactionHeader::BYTES_LENGTH`].
    pub fn header_bytes(&self) -> Vec<u8> {
        self.header.to_bytes()
    }

    /// The exact bytes that were hashed and signed:
    /// header bytes ++ payload bytes.
    pub fn digest_input(&self) -> Vec<u8> {
        let mut buf = self.header.to_bytes();
        buf.extend_from_slice(&self.payload.to_bytes());
        buf
    }

    /// The SHA-256 digest every signature in the map covers.
    pub fn digest(&self) -> [u8; 32] {
        sha256_array(&self.digest_input())
    }
}
