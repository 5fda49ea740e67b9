//! # Account Keys
//!
//! Ed25519 keypairs for account transaction signing.
//!
//! An account holds one or more credentials, each with up to 255 keys; every
//! one of those keys is an Ed25519 keypair represented by this module's
//! [`AccountKeypair`]. Signing is deterministic — the same key over the same
//! digest always yields the same 64-byte signature.
//!
//! ## Security considerations
//!
//! - We use OS-level RNG (`OsRng`) for key generation.
//! - Key bytes are never logged and never appear in `Debug` output. If you
//!   add logging to this module, keep it that way.
//! - The keypair's lifetime should be scoped to the signer that holds it;
//!   nothing in this crate retains key material past the signing call.

use ed25519_dalek::{
    Signature as DalekSignature, Signer, SigningKey, Verifier, VerifyingKey, SECRET_KEY_LENGTH,
};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::config::SIGNATURE_BYTES_LENGTH;

/// Errors that can occur during key and signature handling.
///
/// Intentionally vague about *why* something failed — leaking details about
/// key material through error messages is a classic footgun.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("invalid secret key bytes: wrong length or malformed hex")]
    InvalidSecretKey,

    #[error("invalid public key bytes: not a valid Ed25519 point")]
    InvalidPublicKey,

    #[error("invalid signature bytes: expected {SIGNATURE_BYTES_LENGTH} bytes")]
    InvalidSignature,
}

// ---------------------------------------------------------------------------
// AccountKeypair
// ---------------------------------------------------------------------------

/// One Ed25519 signing key belonging to an account credential.
///
/// The pair (credential index, key index) addresses a specific
/// `AccountKeypair` inside an account's key hierarchy; the signer maps those
/// coordinates to instances of this type.
///
/// Does NOT implement `Serialize`/`Deserialize`. Serializing private keys
/// should be a deliberate act — use [`to_bytes`](Self::to_bytes) /
/// [`from_bytes`](Self::from_bytes) explicitly.
pub struct AccountKeypair {
    signing_key: SigningKey,
}

impl AccountKeypair {
    /// Generate a fresh keypair using the OS cryptographic RNG.
    pub fn generate() -> Self {
        let signing_key = SigningKey::generate(&mut OsRng);
        Self { signing_key }
    }

    /// Constructs a keypair deterministically from a 32-byte seed.
    ///
    /// In Ed25519 the 32-byte secret key *is* the seed. A weak seed means a
    /// weak key; produce seeds with a proper CSPRNG or KDF.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(seed);
        Self { signing_key }
    }

    /// Reconstruct a keypair from raw 32-byte secret key material.
    pub fn from_bytes(secret_key_bytes: &[u8; SECRET_KEY_LENGTH]) -> Self {
        Self::from_seed(secret_key_bytes)
    }

    /// Reconstruct a keypair from a hex-encoded secret key.
    ///
    /// Convenience for loading keys exported by wallet tooling. Don't put
    /// raw hex keys in files you commit.
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(hex_str).map_err(|_| KeyError::InvalidSecretKey)?;
        let arr: [u8; SECRET_KEY_LENGTH] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| KeyError::InvalidSecretKey)?;
        Ok(Self::from_bytes(&arr))
    }

    /// Returns the public half of this keypair.
    pub fn public_key(&self) -> AccountPublicKey {
        AccountPublicKey {
            bytes: self.signing_key.verifying_key().to_bytes(),
        }
    }

    /// Sign a message (in practice: the 32-byte transaction digest).
    ///
    /// Deterministic — no nonce management, no RNG at signing time.
    pub fn sign(&self, message: &[u8]) -> AccountSignature {
        let sig = self.signing_key.sign(message);
        AccountSignature {
            bytes: sig.to_bytes().to_vec(),
        }
    }

    /// Verify a signature against this keypair's public key.
    pub fn verify(&self, message: &[u8], signature: &AccountSignature) -> bool {
        self.public_key().verify(message, signature)
    }

    /// Exports the raw 32-byte secret key material. Handle with care.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.signing_key.to_bytes()
    }
}

impl Clone for AccountKeypair {
    /// Cloning a keypair is allowed but should make you uncomfortable.
    /// Every copy of a private key is another thing to protect.
    fn clone(&self) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(&self.signing_key.to_bytes()),
        }
    }
}

impl fmt::Debug for AccountKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print secret key material. Not even partially.
        write!(f, "AccountKeypair(pub={})", self.public_key().to_hex())
    }
}

impl PartialEq for AccountKeypair {
    /// Keypairs compare by public key; comparing secret material in a
    /// non-constant-time way is a habit not worth forming.
    fn eq(&self, other: &Self) -> bool {
        self.public_key() == other.public_key()
    }
}

impl Eq for AccountKeypair {}

// ---------------------------------------------------------------------------
// AccountPublicKey
// ---------------------------------------------------------------------------

/// The public half of an account key, safe to share.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountPublicKey {
    bytes: [u8; 32],
}

impl AccountPublicKey {
    /// Try to create a public key from a byte slice.
    ///
    /// Validates the length and that the bytes are a valid Ed25519 point —
    /// some 32-byte values are not points on the curve.
    pub fn try_from_slice(slice: &[u8]) -> Result<Self, KeyError> {
        let bytes: [u8; 32] = slice.try_into().map_err(|_| KeyError::InvalidPublicKey)?;
        VerifyingKey::from_bytes(&bytes).map_err(|_| KeyError::InvalidPublicKey)?;
        Ok(Self { bytes })
    }

    /// The raw key bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Verify a signature against this public key.
    ///
    /// Boolean result rather than `Result` — callers want yes/no, not a
    /// taxonomy of ways a forgery can fail.
    pub fn verify(&self, message: &[u8], signature: &AccountSignature) -> bool {
        let Ok(verifying_key) = VerifyingKey::from_bytes(&self.bytes) else {
            return false;
        };
        let sig_bytes: [u8; 64] = match signature.bytes.as_slice().try_into() {
            Ok(b) => b,
            Err(_) => return false,
        };
        let dalek_sig = DalekSignature::from_bytes(&sig_bytes);
        verifying_key.verify(message, &dalek_sig).is_ok()
    }

    /// Hex-encoded representation, 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Parse a hex-encoded public key.
    pub fn from_hex(s: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(s).map_err(|_| KeyError::InvalidPublicKey)?;
        Self::try_from_slice(&bytes)
    }
}

impl fmt::Display for AccountPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for AccountPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountPublicKey({})", &self.to_hex()[..16])
    }
}

// ---------------------------------------------------------------------------
// AccountSignature
// ---------------------------------------------------------------------------

/// An Ed25519 signature over the transaction digest.
///
/// 64 bytes, deterministic for a given (key, digest) pair. Stored as
/// `Vec<u8>` for serde compatibility but validated to 64 bytes everywhere a
/// signature is parsed rather than produced.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSignature {
    bytes: Vec<u8>,
}

impl AccountSignature {
    /// Create a signature from its raw 64-byte representation.
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }

    /// Returns the raw signature bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Hex-encoded signature, 128 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Parse a hex-encoded signature. Fails unless it decodes to exactly
    /// 64 bytes.
    pub fn from_hex(s: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(s).map_err(|_| KeyError::InvalidSignature)?;
        if bytes.len() != SIGNATURE_BYTES_LENGTH {
            return Err(KeyError::InvalidSignature);
        }
        Ok(Self { bytes })
    }
}

impl fmt::Display for AccountSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for AccountSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex_str = self.to_hex();
        if hex_str.len() >= 128 {
            write!(
                f,
                "AccountSignature({}...{})",
                &hex_str[..8],
                &hex_str[120..]
            )
        } else {
            write!(f, "AccountSignature({})", hex_str)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
