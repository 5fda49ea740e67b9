//! # Prepared Transactions
//!
//! The staging step between an unsigned payload and a signed transaction.
//! A [`PreparedAccountTransaction`] holds the sender, sequence number,
//! expiry, and payload — and deliberately nothing else. In particular it
//! holds **no header**: the header's energy bound depends on how many keys
//! will sign, and only the signer knows that. Computing a header here with
//! a guessed signature count would produce an energy figure the node
//! rejects.
//!
//! Having a separate type for this stage means "accidentally submitted an
//! unsigned transaction" is a compile error, not an incident.

use serde::{Deserialize, Serialize};

use crate::transactions::payload::AccountTransactionPayload;
use crate::transactions::signed::SignedAccountTransaction;
use crate::transactions::signing::{sign_transaction, TransactionSigner};
use crate::types::address::AccountAddress;
use crate::types::expiry::Expiry;
use crate::types::sequence::SequenceNumber;

/// An account transaction prepared for signing: all header *inputs* fixed,
/// header itself pending until the signature count is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparedAccountTransaction<P> {
    sender: AccountAddress,
    sequence_number: SequenceNumber,
    expiry: Expiry,
    payload: P,
}

impl<P: AccountTransactionPayload> PreparedAccountTransaction<P> {
    /// Stages a payload with the sender, sequence number, and expiry it
    /// will be signed under.
    pub fn new(
        sender: AccountAddress,
        sequence_number: SequenceNumber,
        expiry: Expiry,
        payload: P,
    ) -> Self {
        Self {
            sender,
            sequence_number,
            expiry,
            payload,
        }
    }

    /// Address of the transaction sender.
    pub fn sender(&self) -> &AccountAddress {
        &self.sender
    }

    /// Account sequence number the transaction will use.
    pub fn sequence_number(&self) -> SequenceNumber {
        self.sequence_number
    }

    /// Expiration time of the transaction.
    pub fn expiry(&self) -> Expiry {
        self.expiry
    }

    /// The staged payload.
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Signs this prepared transaction, consuming it.
    ///
    /// Consumption is the point: the lifecycle is strictly
    /// `Payload → Prepared → Signed`, and a signed transaction cannot be
    /// re-prepared or grow extra signatures afterwards. To sign the same
    /// content twice (the operation is deterministic), clone before
    /// signing.
    pub fn sign(self, signer: &impl TransactionSigner) -> SignedAccountTransaction<P> {
        sign_transaction(self, signer)
    }

    /// Decomposes into fields. Used by the signing step.
    pub(crate) fn into_parts(self) -> (AccountAddress, SequenceNumber, Expiry, P) {
        (self.sender, self.sequence_number, self.expiry, self.payload)
    }
}
