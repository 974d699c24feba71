//! Strong type definitions for the Deaddrop Registry.
//!
//! All identifiers are newtypes to prevent misuse at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// Width of a message scalar in bits.
pub const SCALAR_BITS: usize = 255;

/// A 32-byte participant identity.
///
/// This is the byte encoding of the participant's Ed25519 verifying key.
/// Two participants are the same participant exactly when their bytes are
/// equal; the registry never interprets the contents beyond equality.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantId(pub [u8; 32]);

impl ParticipantId {
    /// Create a new ParticipantId from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParticipantId({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for ParticipantId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for ParticipantId {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// A 255-bit message payload carried in 32 little-endian bytes.
///
/// Bit 0 is the least significant bit of byte 0; bit 255 (the top bit of
/// byte 31) is outside the scalar's range and must be clear. Constructors
/// enforce this, so a `MessageScalar` held by value is always in range.
///
/// Bits 0-248 carry arbitrary content. Bits 249-254 form the flag region
/// constrained by [`validate_structure`](crate::validator::validate_structure).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageScalar([u8; 32]);

impl MessageScalar {
    /// The zero scalar.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Create from raw little-endian bytes.
    ///
    /// Fails with [`CoreError::ScalarOutOfRange`] when bit 255 is set.
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, CoreError> {
        if bytes[31] & 0x80 != 0 {
            return Err(CoreError::ScalarOutOfRange);
        }
        Ok(Self(bytes))
    }

    /// Create from a u64, occupying the low 64 bits.
    pub fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&value.to_le_bytes());
        Self(bytes)
    }

    /// Get the raw little-endian bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Read a single bit, 0-indexed from the least significant.
    ///
    /// # Panics
    ///
    /// Panics if `index >= SCALAR_BITS`.
    pub fn bit(&self, index: usize) -> bool {
        assert!(index < SCALAR_BITS, "bit index {index} out of range");
        (self.0[index / 8] >> (index % 8)) & 1 == 1
    }

    /// Return a copy with a single bit set or cleared.
    ///
    /// # Panics
    ///
    /// Panics if `index >= SCALAR_BITS`.
    pub fn with_bit(&self, index: usize, set: bool) -> Self {
        assert!(index < SCALAR_BITS, "bit index {index} out of range");
        let mut bytes = self.0;
        let mask = 1u8 << (index % 8);
        if set {
            bytes[index / 8] |= mask;
        } else {
            bytes[index / 8] &= !mask;
        }
        Self(bytes)
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for MessageScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MessageScalar({})", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for MessageScalar {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
