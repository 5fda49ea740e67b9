//! # Account Addresses
//!
//! An account address is exactly 32 bytes. The human-readable form is
//! base58check with a leading version byte of 1 — the same encoding family
//! Bitcoin uses, so the checksum catches the fat-fingered character before
//! the node ever sees it.
//!
//! Inside a transaction the address appears as its raw 32 bytes, first
//! field of the header.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::config::{ACCOUNT_ADDRESS_BYTES_LENGTH, ACCOUNT_ADDRESS_VERSION_BYTE};

/// Errors from parsing an account address.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    /// Not valid base58check, or the checksum/version byte is wrong.
    #[error("invalid base58check account address")]
    InvalidBase58,

    /// Decoded to the wrong number of bytes.
    #[error("account address must be {ACCOUNT_ADDRESS_BYTES_LENGTH} bytes, got {actual}")]
    InvalidLength { actual: usize },
}

/// A 32-byte account address.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountAddress {
    bytes: [u8; ACCOUNT_ADDRESS_BYTES_LENGTH],
}

impl AccountAddress {
    /// Serialized width in bytes.
    pub const BYTES_LENGTH: usize = ACCOUNT_ADDRESS_BYTES_LENGTH;

    /// Creates an address from its raw 32 bytes.
    pub fn from_bytes(bytes: [u8; ACCOUNT_ADDRESS_BYTES_LENGTH]) -> Self {
        Self { bytes }
    }

    /// Creates an address from a byte slice, validating the length.
    pub fn try_from_slice(slice: &[u8]) -> Result<Self, AddressError> {
        let bytes: [u8; ACCOUNT_ADDRESS_BYTES_LENGTH] =
            slice
                .try_into()
                .map_err(|_| AddressError::InvalidLength {
                    actual: slice.len(),
                })?;
        Ok(Self { bytes })
    }

    /// The raw address bytes, as they appear in the header.
    pub fn as_bytes(&self) -> &[u8; ACCOUNT_ADDRESS_BYTES_LENGTH] {
        &self.bytes
    }

    /// The address in its fixed-width wire encoding (the raw bytes).
    pub fn to_bytes(&self) -> [u8; ACCOUNT_ADDRESS_BYTES_LENGTH] {
        self.bytes
    }

    /// The base58check string form with version byte 1.
    pub fn to_base58check(&self) -> String {
        bs58::encode(self.bytes)
            .with_check_version(ACCOUNT_ADDRESS_VERSION_BYTE)
            .into_string()
    }
}

impl FromStr for AccountAddress {
    type Err = AddressError;

    /// Parses the base58check form, verifying checksum and version byte.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = bs58::decode(s)
            .with_check(Some(ACCOUNT_ADDRESS_VERSION_BYTE))
            .into_vec()
            .map_err(|_| AddressError::InvalidBase58)?;
        // bs58 keeps the version byte at the front of the decoded payload.
        Self::try_from_slice(&decoded[1..])
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base58check())
    }
}

impl fmt::Debug for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountAddress({})", self.to_base58check())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference address also used by the integration suite.
    const KNOWN_ADDRESS: &str = "3QuZ47NkUk5icdDSvnfX8HiJzCnSRjzi6KwGEmqgQ7hCXNBTWN";

    #[test]
    fn parse_known_address() {
        let address: AccountAddress = KNOWN_ADDRESS.parse().unwrap();
        assert_eq!(address.as_bytes().len(), 32);
    }

    #[test]
    fn base58check_roundtrip() {
        let address: AccountAddress = KNOWN_ADDRESS.parse().unwrap();
        assert_eq!(address.to_base58check(), KNOWN_ADDRESS);
        let reparsed: AccountAddress = address.to_base58check().parse().unwrap();
        assert_eq!(address, reparsed);
    }

    #[test]
    fn bytes_roundtrip() {
        let address: AccountAddress = KNOWN_ADDRESS.parse().unwrap();
        let restored = AccountAddress::try_from_slice(&address.to_bytes()).unwrap();
        assert_eq!(address, restored);
    }

    #[test]
    fn corrupted_address_fails_checksum() {
        // Flip the last character; base58check must notice.
        let mut corrupted = KNOWN_ADDRESS.to_string();
        corrupted.pop();
        corrupted.push('M');
        assert_eq!(
            corrupted.parse::<AccountAddress>(),
            Err(AddressError::InvalidBase58)
        );
    }

    #[test]
    fn garbage_input_is_rejected() {
        assert!("".parse::<AccountAddress>().is_err());
        assert!("not-base58-0OIl".parse::<AccountAddress>().is_err());
    }

    #[test]
    fn wrong_slice_length_is_rejected() {
        assert_eq!(
            AccountAddress::try_from_slice(&[0u8; 20]),
            Err(AddressError::InvalidLength { actual: 20 })
        );
    }

    #[test]
    fn display_uses_base58check() {
        let address: AccountAddress = KNOWN_ADDRESS.parse().unwrap();
        assert_eq!(address.to_string(), KNOWN_ADDRESS);
    }
}
