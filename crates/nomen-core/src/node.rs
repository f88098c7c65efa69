//! # Fixed-Width Hash Values
//!
//! Newtypes for the 32-byte hash values that address the registry:
//!
//! - [`Node`] — position of a fully-qualified name in the hierarchical
//!   namespace. The root node is all zeroes.
//! - [`LabelHash`] — hash of one normalized label's UTF-8 bytes.
//! - [`SealedBidHash`] — the on-chain commitment to a sealed bid tuple.
//! - [`SecretHash`] — hash of a bid secret, the form in which the secret
//!   travels to the auction contract.
//!
//! Type-level distinction prevents cross-namespace confusion: a
//! `LabelHash` cannot be passed where a `Node` is expected even though
//! both are 32 bytes.
//!
//! All four are pure value types — derived, never stored independently,
//! recomputed on demand.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::NameError;

/// A 32-byte node identifying a name's position in the namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node(pub [u8; 32]);

impl Node {
    /// The root of the namespace — 32 zero bytes.
    pub const ROOT: Node = Node([0u8; 32]);

    /// The raw hash bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render as lowercase hex, no prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex text, with or without a `0x` prefix.
    ///
    /// # Errors
    ///
    /// Returns [`NameError::InvalidIdentifier`] unless the input is
    /// exactly 64 hex digits.
    pub fn from_hex(text: &str) -> Result<Self, NameError> {
        let bytes = decode_fixed_hex::<32>(text)?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// The 32-byte hash of a single normalized label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabelHash(pub [u8; 32]);

impl LabelHash {
    /// The raw hash bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render as lowercase hex, no prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for LabelHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// The 32-byte commitment to a sealed bid tuple.
///
/// Produced only by the auction contract's own hash entry point — the
/// client never recomputes this value independently, so the commitment
/// always matches the contract bit-for-bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SealedBidHash(pub [u8; 32]);

impl SealedBidHash {
    /// The raw hash bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render as lowercase hex, no prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for SealedBidHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// The 32-byte hash of a bid secret.
///
/// The plaintext secret never leaves the caller; only its hash is handed
/// to the contract, at seal time and again at reveal time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SecretHash(pub [u8; 32]);

impl SecretHash {
    /// The raw hash bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render as lowercase hex, no prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for SecretHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Decode hex text into an exact-width byte array.
pub(crate) fn decode_fixed_hex<const N: usize>(text: &str) -> Result<[u8; N], NameError> {
    let stripped = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    if stripped.len() != N * 2 {
        return Err(NameError::InvalidIdentifier {
            input: text.to_string(),
            reason: format!("expected {} hex digits, got {}", N * 2, stripped.len()),
        });
    }
    let decoded = hex::decode(stripped).map_err(|e| NameError::InvalidIdentifier {
        input: text.to_string(),
        reason: e.to_string(),
    })?;
    let mut bytes = [0u8; N];
    bytes.copy_from_slice(&decoded);
    Ok(bytes)
}
