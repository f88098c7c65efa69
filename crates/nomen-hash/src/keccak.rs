//! # Keccak-256 Primitive
//!
//! The ledger's native 256-bit hash. Note this is original Keccak, not
//! the padded NIST SHA-3 — the two differ on every input.

use sha3::{Digest, Keccak256};

/// Compute the Keccak-256 digest of a byte string.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&Keccak256::digest(data));
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_vector() {
        // Keccak-256 of the empty string, distinct from SHA3-256.
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_known_vector() {
        assert_eq!(
            hex::encode(keccak256(b"eth")),
            "4f5b812789fc606be1b3b16908db13fc7a9adf7ca72641f84d75b47069d3d7f0"
        );
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(keccak256(b"tickets"), keccak256(b"tickets"));
        assert_ne!(keccak256(b"tickets"), keccak256(b"ticket"));
    }
}
