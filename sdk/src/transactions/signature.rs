//! # The Signature Map
//!
//! Signatures on an account transaction form a two-level map: credential
//! index → key index → signature. The map is *keyed, not sequenced* —
//! insertion order is irrelevant, and uniqueness of the (credential, key)
//! coordinate is the only structural invariant. Re-inserting a coordinate
//! overwrites; it never duplicates.
//!
//! Wire serialization of this map into the node's message structure belongs
//! to the transport layer, not here.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::crypto::keys::AccountSignature;
use crate::types::indexes::{CredentialIndex, KeyIndex};

/// The signatures of an account transaction, keyed by (credential index,
/// key index).
///
/// An empty map is structurally valid — a transaction signed by zero keys
/// is useless but well-formed, and rejecting it is the node's call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountTransactionSignature {
    signatures: BTreeMap<CredentialIndex, BTreeMap<KeyIndex, AccountSignature>>,
}

impl AccountTransactionSignature {
    /// An empty signature map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a signature at (credential, key).
    ///
    /// Returns the previous signature at that coordinate, if any — same
    /// overwrite semantics as the underlying map.
    pub fn insert(
        &mut self,
        credential: CredentialIndex,
        key: KeyIndex,
        signature: AccountSignature,
    ) -> Option<AccountSignature> {
        self.signatures
            .entry(credential)
            .or_default()
            .insert(key, signature)
    }

    /// The signature at (credential, key), if present.
    pub fn get(&self, credential: CredentialIndex, key: KeyIndex) -> Option<&AccountSignature> {
        self.signatures.get(&credential)?.get(&key)
    }

    /// Total number of signatures across all credentials.
    pub fn count(&self) -> u32 {
        self.signatures.values().map(|keys| keys.len() as u32).sum()
    }

    /// Whether the map holds no signatures at all.
    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// Iterates over every (credential, key, signature) triple in
    /// ascending coordinate order.
    pub fn iter(&self) -> impl Iterator<Item = (CredentialIndex, KeyIndex, &AccountSignature)> {
        self.signatures.iter().flat_map(|(credential, keys)| {
            keys.iter()
                .map(move |(key, signature)| (*credential, *key, signature))
        })
    }

    /// The underlying two-level map, for transport-layer encoders that walk
    /// the credential structure directly.
    pub fn as_map(&self) -> &BTreeMap<CredentialIndex, BTreeMap<KeyIndex, AccountSignature>> {
        &self.signatures
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
