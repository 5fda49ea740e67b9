//! # Transactions
//!
//! The two-phase lifecycle that turns an unsigned payload into a signed,
//! byte-exact account transaction.
//!
//! ## Architecture
//!
//! ```text
//! payload.rs   — Payload capability trait and the shipped payload kinds
//! prepare.rs   — PreparedAccountTransaction: staged, header pending
//! cost.rs      — The protocol energy-cost formula
//! header.rs    — AccountTransactionHeader and its fixed 60-byte layout
//! signature.rs — AccountTransactionSignature, the keyed signature map
//! signing.rs   — TransactionSigner trait, AccountSigner, and the sign step
//! signed.rs    — SignedAccountTransaction, the final artifact
//! ```
//!
//! ## Lifecycle
//!
//! 1. **Prepare** — bundle sender, sequence number, and expiry with the
//!    payload. No header exists yet.
//! 2. **Sign** — serialize the payload, compute the energy bound from the
//!    signer's key count, materialize the header, hash header ++ payload
//!    with SHA-256, and have every registered key sign that digest.
//! 3. **Submit** — hand the signed transaction's bytes and signature map to
//!    whatever transport talks to the node. Not this crate's problem.
//!
//! ## Design Decisions
//!
//! - The header is constructed at sign time, never at prepare time, because
//!   the energy formula depends on the signature count and only the signer
//!   knows it. Prepared and Signed are distinct types so the compiler stops
//!   you from transmitting a staged transaction.
//! - The signature map is keyed, not sequenced: a BTreeMap of BTreeMaps
//!   indexed by (credential index, key index). Inserting the same pair twice
//!   overwrites. Zero entries is structurally valid — rejecting under-signed
//!   transactions is the node's job.
//! - Signing a prepared transaction consumes it. Re-signing means preparing
//!   again; there is no way to append signatures to a finished transaction.

pub mod cost;
pub mod header;
pub mod payload;
pub mod prepare;
pub mod signature;
pub mod signed;
pub mod signing;

pub use cost::calculate_energy_cost;
pub use header::AccountTransactionHeader;
pub use payload::{
    AccountTransactionPayload, Memo, PayloadError, RegisterData, RegisteredData, Transfer,
    TransferWithMemo,
};
pub use prepare::PreparedAccountTransaction;
pub use signature::AccountTransactionSignature;
pub use signed::SignedAccountTransaction;
pub use signing::{sign_transaction, AccountSigner, TransactionSigner};
