//! SHA-256 message padding.
//!
//! The padded buffer is the message, a single `0x80` byte, as many zero
//! bytes as needed to reach 56 mod 64, and the original message length in
//! bits as a 64-bit big-endian integer.

use super::{BLOCK_LEN, Message};

/// Size of the trailing length field in bytes.
const LENGTH_FIELD_LEN: usize = 8;

/// Returns the length of the buffer produced by [`pad_message`] for a
/// message of `message_len` bytes.
///
/// The result is always a nonzero multiple of [`BLOCK_LEN`].
pub const fn padded_len(message_len: usize) -> usize {
    let min = message_len + 1 + LENGTH_FIELD_LEN;

    min.div_ceil(BLOCK_LEN) * BLOCK_LEN
}

/// Pads a message into a whole number of 64-byte blocks.
///
/// # Notes
/// - Text is encoded as UTF-8 before padding.
/// - The empty message pads to a single block.
/// - The bit length is computed with wrapping multiplication, matching the
///   "length modulo 2^64" rule of FIPS 180-4.
pub fn pad_message(message: Message<'_>) -> Vec<u8> {
    let bytes = message.as_bytes();
    let total = padded_len(bytes.len());

    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(bytes);
    out.push(0x80);
    out.resize(total - LENGTH_FIELD_LEN, 0x00);

    let bit_len = (bytes.len() as u64).wrapping_mul(8);
    out.extend_from_slice(&bit_len.to_be_bytes());

    debug_assert_eq!(out.len() % BLOCK_LEN, 0);

    out
}
