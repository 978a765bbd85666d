//! Input normalization.
//!
//! A message is either text or raw bytes. Statically typed callers convert
//! through `From`; callers holding loosely-typed values go through
//! [`Message::from_any`], which rejects anything that is not text or bytes.

use std::any::{Any, type_name};
use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

use crate::error::HashError;

/// A message accepted by the hashing pipeline.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Message<'a> {
    /// Text, hashed as its UTF-8 encoding.
    Text(&'a str),
    /// Raw bytes, hashed as-is.
    Bytes(&'a [u8]),
}

impl<'a> Message<'a> {
    /// Returns the bytes that are fed to the padder.
    pub fn as_bytes(&self) -> &'a [u8] {
        match *self {
            Message::Text(text) => text.as_bytes(),
            Message::Bytes(bytes) => bytes,
        }
    }

    /// Length of the message in bytes.
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Builds a message from a value whose type is only known at runtime.
    ///
    /// Accepted text types: `String`, `&'static str`, `&'static String`,
    /// `Box<str>`, `Cow<'static, str>`, `Rc<str>` and `Arc<str>`.
    ///
    /// Accepted byte types: `Vec<u8>`, `&'static Vec<u8>`, `Box<[u8]>`,
    /// `&'static [u8]`, `Cow<'static, [u8]>`, `Rc<[u8]>`, `Arc<[u8]>`, and
    /// `[u8; N]` / `&'static [u8; N]` for `N` up to 64 and the power-of-two
    /// sizes 128 through 4096.
    ///
    /// Any other type yields [`HashError::InvalidInputType`].
    pub fn from_any<T: Any>(value: &'a T) -> Result<Self, HashError> {
        let value: &'a dyn Any = value;

        if let Some(text) = any_text(value) {
            return Ok(Message::Text(text));
        }

        if let Some(bytes) = any_bytes(value).or_else(|| any_byte_array(value)) {
            return Ok(Message::Bytes(bytes));
        }

        Err(HashError::InvalidInputType {
            type_name: type_name::<T>(),
        })
    }
}

/// Tries each listed type in turn and views the first match through
/// `AsRef<$target>`.
macro_rules! downcast_as_ref {
    ($value:expr => $target:ty; $($ty:ty),+ $(,)?) => {{
        let value: &dyn Any = $value;
        let mut found: Option<&$target> = None;

        $(
            if found.is_none() {
                found = value.downcast_ref::<$ty>().map(AsRef::<$target>::as_ref);
            }
        )+

        found
    }};
}

macro_rules! byte_arrays {
    ($value:expr; $($n:literal)+) => {
        downcast_as_ref!($value => [u8]; $([u8; $n], &'static [u8; $n]),+)
    };
}

fn any_text(value: &dyn Any) -> Option<&str> {
    downcast_as_ref!(value => str;
        String,
        &'static str,
        &'static String,
        Box<str>,
        Cow<'static, str>,
        Rc<str>,
        Arc<str>,
    )
}

fn any_bytes(value: &dyn Any) -> Option<&[u8]> {
    downcast_as_ref!(value => [u8];
        Vec<u8>,
        &'static Vec<u8>,
        Box<[u8]>,
        &'static [u8],
        Cow<'static, [u8]>,
        Rc<[u8]>,
        Arc<[u8]>,
    )
}

fn any_byte_array(value: &dyn Any) -> Option<&[u8]> {
    byte_arrays!(value;
        0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30
        31 32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58
        59 60 61 62 63 64 128 256 512 1024 2048 4096
    )
}

impl<'a> From<&'a str> for Message<'a> {
    fn from(value: &'a str) -> Self {
        Message::Text(value)
    }
}

impl<'a> From<&'a String> for Message<'a> {
    fn from(value: &'a String) -> Self {
        Message::Text(value)
    }
}

impl<'a> From<&'a [u8]> for Message<'a> {
    fn from(value: &'a [u8]) -> Self {
        Message::Bytes(value)
    }
}

impl<'a> From<&'a Vec<u8>> for Message<'a> {
    fn from(value: &'a Vec<u8>) -> Self {
        Message::Bytes(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Message<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        Message::Bytes(value)
    }
}
