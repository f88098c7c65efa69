//! # Ledger Addresses
//!
//! The 20-byte account/contract identifier used by the ledger. Accepts
//! raw bytes or hex text (any case, optional `0x` prefix); renders as
//! lowercase hex. The all-zero address is the "absent" sentinel in
//! registry records — owner lookups and deed handles map it to `None`
//! before it reaches callers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NameError;
use crate::node::decode_fixed_hex;

/// A 20-byte ledger address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The all-zero sentinel address.
    pub const ZERO: Address = Address([0u8; 20]);

    /// Construct from a raw byte slice.
    ///
    /// # Errors
    ///
    /// Returns [`NameError::InvalidIdentifier`] unless the slice is
    /// exactly 20 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, NameError> {
        let fixed: [u8; 20] = bytes.try_into().map_err(|_| NameError::InvalidIdentifier {
            input: hex::encode(bytes),
            reason: format!("expected 20 bytes, got {}", bytes.len()),
        })?;
        Ok(Self(fixed))
    }

    /// Parse from hex text, with or without a `0x` prefix, any case.
    ///
    /// # Errors
    ///
    /// Returns [`NameError::InvalidIdentifier`] unless the input is
    /// exactly 40 hex digits.
    pub fn parse(text: &str) -> Result<Self, NameError> {
        let bytes = decode_fixed_hex::<20>(text)?;
        Ok(Self(bytes))
    }

    /// Whether this is the all-zero sentinel.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    /// The raw address bytes.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Render as lowercase hex, no prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl FromStr for Address {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
