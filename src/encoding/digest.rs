//! SHA-256 digest of an input code, viewed as a 256-bit big-endian integer
//!
//! Every visual parameter of an identicon is a masked bit range of this value,
//! counted from the least significant bit.

use bitvec::prelude::*;
use sha2::{Digest as _, Sha256};
use std::fmt;

/// Width of the digest in bytes
pub const DIGEST_BYTES: usize = 32;

/// A 256-bit unsigned integer stored as big-endian bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_BYTES]);

impl Digest {
    /// Hash the UTF-8 bytes of `code`
    ///
    /// Total over all strings; the empty string has a fixed, valid digest.
    pub fn of(code: &str) -> Self {
        Self(Sha256::digest(code.as_bytes()).into())
    }

    /// Wrap raw big-endian bytes
    pub const fn from_bytes(bytes: [u8; DIGEST_BYTES]) -> Self {
        Self(bytes)
    }

    /// Build a digest whose integer value is `value`
    pub fn from_u128(value: u128) -> Self {
        let mut bytes = [0u8; DIGEST_BYTES];
        if let Some(low) = bytes.get_mut(DIGEST_BYTES - 16..) {
            low.copy_from_slice(&value.to_be_bytes());
        }
        Self(bytes)
    }

    /// Raw big-endian bytes
    pub const fn as_bytes(&self) -> &[u8; DIGEST_BYTES] {
        &self.0
    }

    /// Extract `width` bits starting at bit `offset` (LSB = bit 0)
    ///
    /// Ranges reaching past bit 255 read as zero; `width` is capped at 32.
    pub fn field(&self, offset: usize, width: usize) -> u32 {
        let width = width.min(32);
        if width == 0 {
            return 0;
        }

        // Little-endian byte order makes bit `i` of the integer bit `i` of the slice
        let mut little_endian = self.0;
        little_endian.reverse();
        let bits = little_endian.view_bits::<Lsb0>();

        let end = (offset + width).min(bits.len());
        bits.get(offset..end)
            .filter(|range| !range.is_empty())
            .map_or(0, |range| range.load_le::<u32>())
    }

    /// Low 32 bits of the integer value
    pub fn low_u32(&self) -> u32 {
        self.field(0, 32)
    }

    /// Lowercase hexadecimal of the full 256-bit value
    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    /// Lowercase hexadecimal of the low 32 bits, zero padded to 8 digits
    pub fn short_hex(&self) -> String {
        format!("{:08x}", self.low_u32())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
