//! Error types for the hashing pipeline and digest parsing.

use thiserror::Error;

/// Errors returned by the hashing entry points.
///
/// Hashing itself cannot fail once the input has been accepted: the only
/// error is `InvalidInputType`, raised before any padding or compression
/// takes place.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HashError {
    /// The supplied value is neither text nor a byte sequence.
    #[error("invalid input type `{type_name}`: expected text or bytes")]
    InvalidInputType { type_name: &'static str },
}

/// Errors returned by [`Digest::from_hex`](crate::primitives::Digest::from_hex).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseDigestError {
    /// The string does not hold exactly 64 characters.
    #[error("expected 64 hex characters, got {len}")]
    InvalidLength { len: usize },

    /// A character outside `0-9`, `a-f`, `A-F`.
    #[error("non-hex byte {byte:#04x} at position {index}")]
    InvalidCharacter { index: usize, byte: u8 },
}
