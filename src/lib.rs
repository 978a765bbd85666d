//! SHA-256 from first principles
//!
//! This crate computes 256-bit SHA-256 digests without relying on any
//! external hashing primitive. Every stage of the pipeline is exposed so it
//! can be inspected and tested on its own.
//!
//! # Module overview
//!
//! - `hash`  
//!   The SHA-256 pipeline: message normalization, padding, schedule
//!   expansion, the 64-round compression function and state accumulation.
//!   [`sha256`] and [`sha256_any`] are the entry points.
//!
//! - `primitives`  
//!   The [`Digest`] value type: big-endian serialization of the final hash
//!   state, with lowercase/uppercase hex formatting and hex parsing.
//!
//! - `error`  
//!   [`HashError`], returned when an input is neither text nor bytes, and
//!   [`ParseDigestError`], returned when a hex digest cannot be parsed.
//!
//! # Example
//!
//! ```
//! use sha256_modified::sha256;
//!
//! let digest = sha256("abc");
//! assert_eq!(
//!     digest.to_hex(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```
//!
//! # Design goals
//!
//! - Exact 32-bit wrapping arithmetic at every addition and rotation
//! - No shared mutable state: each call owns its hash state
//! - Minimal and explicit APIs
//!
//! This crate is not a replacement for audited, constant-time
//! implementations. It does not support streaming input: the whole message
//! is buffered before hashing.

pub mod error;
pub mod hash;
pub mod primitives;

pub use error::{HashError, ParseDigestError};
pub use hash::sha256::Message;
pub use hash::{sha256, sha256_any};
pub use primitives::Digest;
