//! Link-layer addresses.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors parsing a MAC address.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MacAddrError {
    #[error("invalid MAC address length: expected 6 bytes, got {0}")]
    InvalidLength(usize),

    #[error("invalid MAC address '{0}'")]
    InvalidFormat(String),
}

/// A 48-bit IEEE 802 MAC address.
///
/// Used as the roster key for data-path peers and as the self address of
/// each data-path interface.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MacAddr([u8; 6]);

impl MacAddr {
    /// The broadcast address `ff:ff:ff:ff:ff:ff`.
    pub const BROADCAST: MacAddr = MacAddr([0xff; 6]);

    /// Create from a 6-byte array.
    pub const fn new(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    /// Create from a slice.
    pub fn from_slice(slice: &[u8]) -> Result<Self, MacAddrError> {
        let bytes: [u8; 6] = slice
            .try_into()
            .map_err(|_| MacAddrError::InvalidLength(slice.len()))?;
        Ok(Self(bytes))
    }

    /// Return the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }

    /// Check for a group (multicast/broadcast) address.
    pub fn is_group(&self) -> bool {
        self.0[0] & 0x01 != 0
    }

    /// Check for the all-zero address.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 6]
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            b[0], b[1], b[2], b[3], b[4], b[5]
        )
    }
}

impl fmt::Debug for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MacAddr({})", self)
    }
}

impl FromStr for MacAddr {
    type Err = MacAddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; 6];
        let mut parts = s.split([':', '-']);
        for byte in bytes.iter_mut() {
            let part = parts
                .next()
                .ok_or_else(|| MacAddrError::InvalidFormat(s.to_string()))?;
            if part.len() != 2 {
                return Err(MacAddrError::InvalidFormat(s.to_string()));
            }
            *byte = u8::from_str_radix(part, 16)
                .map_err(|_| MacAddrError::InvalidFormat(s.to_string()))?;
        }
        if parts.next().is_some() {
            return Err(MacAddrError::InvalidFormat(s.to_string()));
        }
        Ok(Self(bytes))
    }
}

impl From<[u8; 6]> for MacAddr {
    fn from(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for MacAddr {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for MacAddr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MacAddr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
