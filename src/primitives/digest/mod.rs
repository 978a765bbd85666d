//! 256-bit digest value.

mod conv;
mod core;
mod fmt;

pub use self::core::Digest;
