//! 256-bit digest primitive
//!
//! A `Digest` is the final output of a SHA-256 computation: the eight state
//! words serialized in big-endian order. It is a plain value type, cheap
//! to copy and compare.

use crate::error::ParseDigestError;
use crate::hash::sha256::DIGEST_LEN;

/// Fixed-size 32-byte hash output.
///
/// The bytes are stored in the order they are emitted by the digest
/// assembler, i.e. state word 0 first, each word big-endian.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest(pub(crate) [u8; DIGEST_LEN]);

impl Digest {
    /// Length of a digest in bytes.
    pub const LEN: usize = DIGEST_LEN;

    /// Returns the raw digest bytes.
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Renders the digest as 64 lowercase hexadecimal characters.
    pub fn to_hex(&self) -> String {
        format!("{self:x}")
    }

    /// Parses a digest from 64 hexadecimal characters.
    ///
    /// Upper and lower case digits are accepted. Surrounding whitespace is
    /// not.
    pub fn from_hex(hex: &str) -> Result<Self, ParseDigestError> {
        let hex = hex.as_bytes();

        if hex.len() != DIGEST_LEN * 2 {
            return Err(ParseDigestError::InvalidLength { len: hex.len() });
        }

        let mut out = [0u8; DIGEST_LEN];

        for (i, o) in out.iter_mut().enumerate() {
            let hi = nibble(hex, 2 * i)?;
            let lo = nibble(hex, 2 * i + 1)?;
            *o = (hi << 4) | lo;
        }

        Ok(Digest(out))
    }
}

fn nibble(hex: &[u8], index: usize) -> Result<u8, ParseDigestError> {
    let c = hex[index];

    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(ParseDigestError::InvalidCharacter { index, byte: c }),
    }
}
