//! # Cryptographic Primitives
//!
//! Everything security-related flows through here: the SHA-256 digest the
//! node expects to be signed, and the Ed25519 keys that sign it.
//!
//! We deliberately use boring, well-audited cryptography:
//!
//! - **Ed25519** for signatures — deterministic, compact, and the only
//!   scheme the account-key hierarchy speaks.
//! - **SHA-256** for the signing digest — fixed by the protocol.
//!
//! Everything here is a thin, type-safe wrapper around audited
//! implementations (`ed25519-dalek`, `sha2`). If you're tempted to optimize
//! these functions, go read about timing attacks first.

pub mod hash;
pub mod keys;

pub use hash::{sha256, sha256_array};
pub use keys::{AccountKeypair, AccountPublicKey, AccountSignature, KeyError};
