//! # Transaction Expiry
//!
//! A transaction carries an expiry timestamp (seconds since the Unix epoch)
//! after which the node must reject it. Expiry bounds how long a signed
//! transaction stays submittable, which in turn bounds how long a stolen
//! signed blob is useful.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::codec;
use crate::config::EXPIRY_BYTES_LENGTH;

/// A transaction expiry time. Serializes to 8 big-endian bytes of seconds
/// since epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Expiry {
    seconds_since_epoch: u64,
}

impl Expiry {
    /// Serialized width in bytes.
    pub const BYTES_LENGTH: usize = EXPIRY_BYTES_LENGTH;

    /// Creates an expiry from raw seconds since the Unix epoch.
    pub fn from_seconds(seconds_since_epoch: u64) -> Self {
        Self {
            seconds_since_epoch,
        }
    }

    /// Creates an expiry from a UTC datetime.
    ///
    /// Returns `None` for datetimes before the epoch, which are not
    /// representable (and not useful expiry times anyway).
    pub fn from_datetime(datetime: DateTime<Utc>) -> Option<Self> {
        u64::try_from(datetime.timestamp())
            .ok()
            .map(Self::from_seconds)
    }

    /// Creates an expiry the given number of minutes from now.
    ///
    /// The usual way to pick an expiry when submitting: short enough to
    /// bound replay exposure, long enough to survive network hiccups.
    pub fn from_minutes_from_now(minutes: u32) -> Self {
        let when = Utc::now() + Duration::minutes(i64::from(minutes));
        // Utc::now() is after 1970 on any sane clock.
        Self::from_seconds(when.timestamp().max(0) as u64)
    }

    /// Seconds since the Unix epoch.
    pub fn seconds_since_epoch(&self) -> u64 {
        self.seconds_since_epoch
    }

    /// Whether this expiry is in the past relative to `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match u64::try_from(now.timestamp()) {
            Ok(now_secs) => self.seconds_since_epoch < now_secs,
            Err(_) => false, // pre-epoch "now": nothing has expired yet
        }
    }

    /// The expiry in the 8-byte big-endian wire format.
    pub fn to_bytes(&self) -> [u8; 8] {
        codec::encode_u64(self.seconds_since_epoch)
    }
}

impl fmt::Display for Expiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match DateTime::<Utc>::from_timestamp(self.seconds_since_epoch as i64, 0) {
            Some(dt) => write!(f, "{}", dt.to_rfc3339()),
            None => write!(f, "{}s since epoch", self.seconds_since_epoch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_seconds_roundtrip() {
        assert_eq!(Expiry::from_seconds(65537).seconds_since_epoch(), 65537);
    }

    #[test]
    fn encoding_is_eight_big_endian_bytes() {
        assert_eq!(
            Expiry::from_seconds(65537).to_bytes(),
            [0, 0, 0, 0, 0, 1, 0, 1]
        );
    }

    #[test]
    fn from_datetime_rejects_pre_epoch() {
        let before = DateTime::<Utc>::from_timestamp(-1, 0).unwrap();
        assert!(Expiry::from_datetime(before).is_none());

        let after = DateTime::<Utc>::from_timestamp(65537, 0).unwrap();
        assert_eq!(
            Expiry::from_datetime(after).unwrap(),
            Expiry::from_seconds(65537)
        );
    }

    #[test]
    fn minutes_from_now_is_in_the_future() {
        let expiry = Expiry::from_minutes_from_now(10);
        assert!(!expiry.is_expired_at(Utc::now()));
    }

    #[test]
    fn expiry_comparison() {
        let now = DateTime::<Utc>::from_timestamp(1_000_000, 0).unwrap();
        assert!(Expiry::from_seconds(999_999).is_expired_at(now));
        assert!(!Expiry::from_seconds(1_000_000).is_expired_at(now));
        assert!(!Expiry::from_seconds(1_000_001).is_expired_at(now));
    }
}
