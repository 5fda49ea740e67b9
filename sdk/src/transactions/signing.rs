//! # Signing
//!
//! The step that turns a staged transaction into the final artifact. This
//! is where the header is materialized — energy bound included — and where
//! every registered key signs the SHA-256 digest of header ++ payload.
//!
//! Signing lives behind the [`TransactionSigner`] trait because key
//! material may not be in-process at all (hardware wallet, remote signer).
//! The in-process implementation is [`AccountSigner`], a plain map from
//! (credential index, key index) to Ed25519 keypairs.

use std::collections::BTreeMap;

use tracing::debug;

use crate::crypto::hash::sha256_array;
use crate::crypto::keys::AccountKeypair;
use crate::transactions::cost::calculate_energy_cost;
use crate::transactions::header::AccountTransactionHeader;
use crate::transactions::payload::AccountTransactionPayload;
use crate::transactions::prepare::PreparedAccountTransaction;
use crate::transactions::signature::AccountTransactionSignature;
use crate::transactions::signed::SignedAccountTransaction;
use crate::types::indexes::{CredentialIndex, KeyIndex};
use crate::types::payload_size::PayloadSize;

// ---------------------------------------------------------------------------
// The signer seam
// ---------------------------------------------------------------------------

/// Anything that can sign a transaction digest on behalf of an account.
///
/// The two methods are intertwined by the protocol: the energy bound baked
/// into the header charges per signature, so the count a signer *declares*
/// must equal the number of signatures it *produces*. An implementation
/// that reports one and delivers another creates transactions the node
/// rejects for an energy mismatch.
pub trait TransactionSigner {
    /// The number of signatures this signer will produce.
    fn signature_count(&self) -> u32;

    /// Signs the 32-byte transaction digest with every key this signer
    /// holds, producing the keyed signature map.
    ///
    /// Each key signs the same digest independently; order is irrelevant
    /// because the result is keyed by (credential, key).
    fn sign_digest(&self, digest: &[u8; 32]) -> AccountTransactionSignature;
}

/// An in-process signer: a map from (credential index, key index) to
/// Ed25519 keypairs.
///
/// A signer with zero keys is valid and produces an empty signature map.
/// Key material lives exactly as long as the signer; nothing is retained
/// by the signing call.
#[derive(Debug, Default)]
pub struct AccountSigner {
    keys: BTreeMap<CredentialIndex, BTreeMap<KeyIndex, AccountKeypair>>,
}

impl AccountSigner {
    /// An empty signer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a keypair at (credential, key), replacing any keypair
    /// already there — coordinates are unique, never duplicated.
    pub fn add_key(
        &mut self,
        credential: CredentialIndex,
        key: KeyIndex,
        keypair: AccountKeypair,
    ) -> &mut Self {
        self.keys.entry(credential).or_default().insert(key, keypair);
        self
    }

    /// Builder-style [`add_key`](Self::add_key).
    pub fn with_key(
        mut self,
        credential: CredentialIndex,
        key: KeyIndex,
        keypair: AccountKeypair,
    ) -> Self {
        self.add_key(credential, key, keypair);
        self
    }
}

impl TransactionSigner for AccountSigner {
    fn signature_count(&self) -> u32 {
        self.keys.values().map(|keys| keys.len() as u32).sum()
    }

    fn sign_digest(&self, digest: &[u8; 32]) -> AccountTransactionSignature {
        // A pure fold over independent signing tasks: each key signs the
        // same digest, results merge into the keyed map afterwards.
        let mut signatures = AccountTransactionSignature::new();
        for (credential, keys) in &self.keys {
            for (key, keypair) in keys {
                signatures.insert(*credential, *key, keypair.sign(digest));
            }
        }
        signatures
    }
}

// ---------------------------------------------------------------------------
// The sign step
// ---------------------------------------------------------------------------

/// Completes a prepared transaction into a signed one.
///
/// The algorithm, in protocol order:
///
/// 1. Serialize the payload; its length becomes the header's payload size.
/// 2. Compute the energy bound from the signer's declared signature count.
/// 3. Materialize the header.
/// 4. Digest = SHA-256(header bytes ++ payload bytes).
/// 5. Every registered key signs the digest into the keyed map.
///
/// Deterministic end to end (Ed25519 is deterministic): signing the same
/// prepared transaction with the same signer twice yields identical header
/// bytes and an identical signature map.
pub fn sign_transaction<P: AccountTransactionPayload>(
    prepared: PreparedAccountTransaction<P>,
    signer: &impl TransactionSigner,
) -> SignedAccountTransaction<P> {
    let (sender, sequence_number, expiry, payload) = prepared.into_parts();

    let payload_bytes = payload.to_bytes();
    let payload_size = PayloadSize::of(&payload_bytes);

    let energy = calculate_energy_cost(
        signer.signature_count(),
        payload.transaction_specific_cost(),
        payload_size,
    );

    let header = AccountTransactionHeader::new(sender, sequence_number, expiry, energy, payload_size);

    let mut digest_input = header.to_bytes();
    digest_input.extend_from_slice(&payload_bytes);
    let digest = sha256_array(&digest_input);

    let signature = signer.sign_digest(&digest);

    debug!(
        sequence_number = sequence_number.value(),
        payload_size = payload_size.size(),
        max_energy = energy.energy(),
        signatures = signature.count(),
        "signed account transaction"
    );

    SignedAccountTransaction::new(header, payload, signature)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
