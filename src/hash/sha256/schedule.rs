//! Message schedule expansion.

use super::BLOCK_LEN;
use super::computations::{small_sigma0, small_sigma1};

/// Number of words in the expanded schedule, one per round.
pub const SCHEDULE_LEN: usize = 64;

/// Expands a 64-byte block into the 64-word message schedule.
///
/// The first 16 words are the block read as big-endian `u32`s. Each later
/// word mixes four earlier ones:
/// `w[i] = w[i-16] + σ0(w[i-15]) + w[i-7] + σ1(w[i-2])` (mod 2^32).
pub fn expand_schedule(block: &[u8; BLOCK_LEN]) -> [u32; SCHEDULE_LEN] {
    let mut w = [0u32; SCHEDULE_LEN];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in 16..SCHEDULE_LEN {
        w[i] = w[i - 16]
            .wrapping_add(small_sigma0(w[i - 15]))
            .wrapping_add(w[i - 7])
            .wrapping_add(small_sigma1(w[i - 2]));
    }

    w
}
