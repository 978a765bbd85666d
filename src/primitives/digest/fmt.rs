use std::fmt::{Display, Formatter, LowerHex, Result, UpperHex};

use crate::primitives::Digest;

impl LowerHex for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}

impl UpperHex for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for byte in self.0.iter() {
            write!(f, "{:02X}", byte)?;
        }

        Ok(())
    }
}

impl Display for Digest {
    /// Formats the digest as lowercase hexadecimal, the conventional
    /// rendering for SHA-256 output.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        LowerHex::fmt(self, f)
    }
}
