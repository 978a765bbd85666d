//! Conversions between `Digest` and word / byte representations
//!
//! The word conversions are the digest assembler: each state word becomes
//! its 4-byte big-endian encoding, in state order.

use crate::primitives::Digest;

/// Serializes the final hash state into a digest.
impl From<[u32; 8]> for Digest {
    fn from(value: [u32; 8]) -> Self {
        let mut out = [0u8; 32];

        for (chunk, v) in out.chunks_exact_mut(4).zip(value) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }

        Digest(out)
    }
}

/// Reads a digest back as eight big-endian words.
impl From<Digest> for [u32; 8] {
    fn from(value: Digest) -> Self {
        let mut out = [0u32; 8];

        for (o, chunk) in out.iter_mut().zip(value.0.chunks_exact(4)) {
            *o = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        out
    }
}

impl From<Digest> for [u8; 32] {
    fn from(value: Digest) -> Self {
        value.0
    }
}

impl From<[u8; 32]> for Digest {
    fn from(value: [u8; 32]) -> Self {
        Digest(value)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
