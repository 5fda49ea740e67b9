//! # ccdkit — Core Library
//!
//! Client-side preparation and signing of CCD account transactions. Given an
//! unsigned payload, ccdkit produces a byte-exact, protocol-conformant signed
//! transaction that a validating node will accept: correct header layout,
//! correct energy accounting, and correct multi-credential signature
//! placement.
//!
//! The node is unforgiving about bytes. Field order, field widths, and
//! endianness are a fixed contract — get one of them wrong and the node
//! either rejects the transaction or, worse, you sign bytes you did not mean
//! to sign. Everything in this crate exists to make that class of mistake
//! impossible to express.
//!
//! ## Architecture
//!
//! The modules mirror the stages a transaction passes through:
//!
//! - **config** — Protocol constants. Field widths, cost parameters, tags.
//! - **codec** — Deterministic big-endian encoding of fixed-width integers.
//! - **crypto** — Ed25519 keypairs and the SHA-256 signing digest.
//! - **types** — Strongly-typed protocol values: amounts, indices, expiry,
//!   sequence numbers, account addresses.
//! - **transactions** — The header model, payload kinds, energy costing, and
//!   the two-phase prepare/sign lifecycle.
//!
//! ## Lifecycle
//!
//! ```text
//! Payload ──prepare──► PreparedAccountTransaction ──sign──► SignedAccountTransaction
//! ```
//!
//! Strictly linear and one-directional. `prepare` stages the sender,
//! sequence number, and expiry next to the payload; the header — and with it
//! the final energy bound — only exists once `sign` runs, because the energy
//! formula needs the signer's actual key count. The type system enforces
//! this: a staged transaction has no header to transmit.
//!
//! ## Design Philosophy
//!
//! 1. Checked arithmetic everywhere money or energy is involved. Overflow is
//!    an error value, never a wrap.
//! 2. One encoding per value. Encoders are pure functions of the input.
//! 3. Secret key material never appears in logs or `Debug` output.
//! 4. Transport, JSON responses, and node-side validation are someone else's
//!    job. This crate stops at the exact bytes to submit.

pub mod codec;
pub mod config;
pub mod crypto;
pub mod transactions;
pub mod types;

// The short list people actually import. Everything else is reachable
// through the module tree.
pub use crypto::keys::{AccountKeypair, AccountPublicKey, AccountSignature};
pub use transactions::header::AccountTransactionHeader;
pub use transactions::payload::{
    AccountTransactionPayload, RegisterData, Transfer, TransferWithMemo,
};
pub use transactions::prepare::PreparedAccountTransaction;
pub use transactions::signature::AccountTransactionSignature;
pub use transactions::signed::SignedAccountTransaction;
pub use transactions::signing::{AccountSigner, TransactionSigner};
pub use types::address::AccountAddress;
pub use types::amount::CcdAmount;
pub use types::energy::EnergyAmount;
pub use types::expiry::Expiry;
pub use types::indexes::{CredentialIndex, KeyIndex};
pub use types::sequence::SequenceNumber;
