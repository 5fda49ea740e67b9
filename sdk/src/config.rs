//! # Protocol Constants
//!
//! Every magic number in ccdkit lives here. If you find yourself hardcoding
//! a byte width or a cost parameter somewhere else, move it here first.
//!
//! These values are fixed by the protocol, not by us. Changing any of them
//! produces transactions the node silently rejects, so treat this file as
//! read-only unless the chain itself changes.

// ---------------------------------------------------------------------------
// Field widths (bytes, as serialized on the wire)
// ---------------------------------------------------------------------------

/// An account address is exactly 32 bytes. Not 20, not 33. Thirty-two.
pub const ACCOUNT_ADDRESS_BYTES_LENGTH: usize = 32;

/// Account sequence numbers serialize as big-endian u64.
pub const SEQUENCE_NUMBER_BYTES_LENGTH: usize = 8;

/// Energy amounts serialize as big-endian u64.
pub const ENERGY_AMOUNT_BYTES_LENGTH: usize = 8;

/// Payload sizes serialize as big-endian u32.
pub const PAYLOAD_SIZE_BYTES_LENGTH: usize = 4;

/// Expiry timestamps serialize as big-endian u64 (seconds since epoch).
pub const EXPIRY_BYTES_LENGTH: usize = 8;

/// CCD amounts serialize as big-endian u64 (µCCD).
pub const CCD_AMOUNT_BYTES_LENGTH: usize = 8;

/// Credential and key indices serialize as a single byte.
pub const INDEX_BYTES_LENGTH: usize = 1;

// ---------------------------------------------------------------------------
// Addresses
// ---------------------------------------------------------------------------

/// Version byte prepended before base58check-encoding an account address.
pub const ACCOUNT_ADDRESS_VERSION_BYTE: u8 = 1;

// ---------------------------------------------------------------------------
// Amounts
// ---------------------------------------------------------------------------

/// Conversion factor between the display unit and the base unit:
/// 1 CCD = 1_000_000 µCCD. All protocol arithmetic happens in µCCD.
pub const MICRO_CCD_PER_CCD: u64 = 1_000_000;

// ---------------------------------------------------------------------------
// Energy cost parameters
// ---------------------------------------------------------------------------

/// Energy charged per signature on the transaction.
pub const COST_PER_SIGNATURE: u64 = 100;

/// Energy charged per byte of header plus payload.
pub const COST_PER_HEADER_AND_PAYLOAD_BYTE: u64 = 1;

// ---------------------------------------------------------------------------
// Payload tags and costs
// ---------------------------------------------------------------------------
//
// The first byte of every serialized payload identifies its kind. The
// transaction-specific energy costs are protocol-assigned per kind.

/// Tag byte for a plain CCD transfer.
pub const TRANSFER_PAYLOAD_TAG: u8 = 3;

/// Tag byte for registering data on chain.
pub const REGISTER_DATA_PAYLOAD_TAG: u8 = 21;

/// Tag byte for a CCD transfer carrying a memo.
pub const TRANSFER_WITH_MEMO_PAYLOAD_TAG: u8 = 22;

/// Transaction-specific energy cost of a plain transfer.
pub const TRANSFER_BASE_COST: u64 = 300;

/// Transaction-specific energy cost of a transfer with memo.
pub const TRANSFER_WITH_MEMO_BASE_COST: u64 = 300;

/// Transaction-specific energy cost of registering data.
pub const REGISTER_DATA_BASE_COST: u64 = 300;

/// Maximum byte length of a transfer memo.
pub const MAX_MEMO_BYTES_LENGTH: usize = 256;

/// Maximum byte length of registered data.
pub const MAX_REGISTERED_DATA_BYTES_LENGTH: usize = 256;

// ---------------------------------------------------------------------------
// Cryptographic parameters
// ---------------------------------------------------------------------------

/// Ed25519 secret keys are 32 bytes.
pub const SIGNING_KEY_BYTES_LENGTH: usize = 32;

/// Ed25519 public keys are 32 bytes.
pub const VERIFYING_KEY_BYTES_LENGTH: usize = 32;

/// Ed25519 signatures are 64 bytes. Always. If yours isn't, it is not an
/// Ed25519 signature.
pub const SIGNATURE_BYTES_LENGTH: usize = 64;

/// The signing digest is SHA-256 over header bytes ++ payload bytes.
pub const DIGEST_BYTES_LENGTH: usize = 32;
