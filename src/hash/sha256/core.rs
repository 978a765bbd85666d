//! SHA-256 core hashing functions
//!
//! This module chains the pipeline stages for a complete message:
//!
//! 1. pad the message into whole 64-byte blocks
//! 2. for each block, in order: expand the schedule, run the compression
//!    rounds and fold the resulting registers into the hash state
//! 3. serialize the final state into a [`Digest`]
//!
//! The hash state is a local of [`sha256`]; nothing is shared between
//! calls, so independent messages may be hashed concurrently.

use std::any::Any;

use tracing::{debug, trace, warn};

use super::computations::compress;
use super::padding::pad_message;
use super::schedule::expand_schedule;
use super::{BLOCK_LEN, H256_INIT, Message};
use crate::error::HashError;
use crate::primitives::Digest;

/// Folds one block's compression output into the hash state.
///
/// Each state word is increased by the matching register, modulo 2^32.
#[inline(always)]
pub fn accumulate(state: &mut [u32; 8], registers: &[u32; 8]) {
    for (s, r) in state.iter_mut().zip(registers) {
        *s = s.wrapping_add(*r);
    }
}

/// Processes a single 512-bit block, updating the hash state in place.
pub fn process_block(block: &[u8; BLOCK_LEN], state: &mut [u32; 8]) {
    let w = expand_schedule(block);
    let registers = compress(state, &w);

    accumulate(state, &registers);
}

/// Computes the SHA-256 digest of a message.
///
/// # Parameters
/// - `message`: text or bytes; anything convertible into a [`Message`]
///
/// # Notes
/// - The whole padded message is buffered before hashing.
/// - Blocks are processed strictly in order, each one reading the state
///   left by the previous one.
pub fn sha256<'a>(message: impl Into<Message<'a>>) -> Digest {
    let message = message.into();
    let padded = pad_message(message);

    debug!(
        message_len = message.len(),
        blocks = padded.len() / BLOCK_LEN,
        "hashing message"
    );

    let mut state = H256_INIT;

    let (blocks, rest) = padded.as_chunks::<BLOCK_LEN>();
    debug_assert!(rest.is_empty());

    for (index, block) in blocks.iter().enumerate() {
        process_block(block, &mut state);

        trace!(block = index, state = ?state, "block folded");
    }

    Digest::from(state)
}

/// Computes the SHA-256 digest of a value whose type is only known at
/// runtime.
///
/// The value is validated before any work is done; see
/// [`Message::from_any`] for the accepted types.
///
/// # Errors
/// [`HashError::InvalidInputType`] if `value` is neither text nor bytes.
pub fn sha256_any<T: Any>(value: &T) -> Result<Digest, HashError> {
    let message = Message::from_any(value).inspect_err(|err| {
        warn!(error = %err, "rejected hash input");
    })?;

    Ok(sha256(message))
}
