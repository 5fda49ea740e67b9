//! # Credential and Key Indices
//!
//! An account has one or more credentials, each identified by a
//! [`CredentialIndex`]. Each credential may hold up to 255 keys, each
//! identified by a [`KeyIndex`] relative to its credential. The pair
//! (credential index, key index) therefore uniquely addresses one signing
//! key belonging to the account — which is exactly how the signature map is
//! keyed.
//!
//! Both are single bytes on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing an index from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndexError {
    #[error("could not parse {0:?} as an index in 0..=255")]
    Parse(String),
}

/// Identifies one credential of an account.
///
/// Serializes as a bare integer so it can key JSON maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialIndex {
    index: u8,
}

impl CredentialIndex {
    pub fn new(index: u8) -> Self {
        Self { index }
    }

    pub fn index(&self) -> u8 {
        self.index
    }

    /// The index as its single wire byte.
    pub fn to_bytes(&self) -> [u8; 1] {
        [self.index]
    }
}

impl From<u8> for CredentialIndex {
    fn from(index: u8) -> Self {
        Self::new(index)
    }
}

impl FromStr for CredentialIndex {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u8>()
            .map(Self::new)
            .map_err(|_| IndexError::Parse(s.to_string()))
    }
}

impl fmt::Display for CredentialIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index)
    }
}

/// Identifies one key within a credential.
///
/// Serializes as a bare integer so it can key JSON maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyIndex {
    index: u8,
}

impl KeyIndex {
    pub fn new(index: u8) -> Self {
        Self { index }
    }

    pub fn index(&self) -> u8 {
        self.index
    }

    /// The index as its single wire byte.
    pub fn to_bytes(&self) -> [u8; 1] {
        [self.index]
    }
}

impl From<u8> for KeyIndex {
    fn from(index: u8) -> Self {
        Self::new(index)
    }
}

impl FromStr for KeyIndex {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u8>()
            .map(Self::new)
            .map_err(|_| IndexError::Parse(s.to_string()))
    }
}

impl fmt::Display for KeyIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index)
    }
}
