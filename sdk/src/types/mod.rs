//! # Protocol Value Types
//!
//! Strongly-typed wrappers for every value that crosses the wire: amounts,
//! energy, sequence numbers, expiry timestamps, payload sizes, account
//! addresses, and the (credential, key) coordinates of signing keys.
//!
//! Two rules hold across the module:
//!
//! 1. **Validated at the boundary.** A constructor either returns a fully
//!    valid value or an error — there is no half-constructed state to
//!    observe. Out-of-range input fails at parse time, overflow fails at the
//!    arithmetic site, and the operands stay untouched.
//! 2. **One encoding per value.** Each type knows its own fixed width and
//!    emits big-endian bytes through [`crate::codec`]. Nothing here wraps,
//!    truncates, or guesses.

pub mod address;
pub mod amount;
pub mod energy;
pub mod expiry;
pub mod indexes;
pub mod payload_size;
pub mod sequence;

pub use address::{AccountAddress, AddressError};
pub use amount::{AmountError, CcdAmount};
pub use energy::EnergyAmount;
pub use expiry::Expiry;
pub use indexes::{CredentialIndex, IndexError, KeyIndex};
pub use payload_size::PayloadSize;
pub use sequence::{SequenceError, SequenceNumber};
