//! Primitive types
//!
//! Fixed-size value types produced by the hashing pipeline.
//!
//! Current primitives include:
//! - `Digest`: a 32-byte SHA-256 output with hex rendering and parsing

mod digest;

pub use digest::Digest;
