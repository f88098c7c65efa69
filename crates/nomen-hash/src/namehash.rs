//! # Hierarchical Name Hashing
//!
//! Implements the registry's node derivation: `labelhash` for a single
//! normalized label, and `namehash`, the right-to-left fold that encodes
//! a name's full parent chain into one 32-byte node.
//!
//! ## The Fold
//!
//! ```text
//! node := 0x00…00                      (the root)
//! for label in labels, least-specific first:
//!     node := keccak256(node ‖ labelhash(label))
//! ```
//!
//! The fold is deliberately order-sensitive: `a.b` and `b.a` hash to
//! different nodes because a child's node depends on its exact parent
//! chain. Reordering is not a collision, it is a different name.

use nomen_core::{Label, LabelHash, Name, NameError, Node, SecretHash};
use sha3::{Digest, Keccak256};

use crate::keccak::keccak256;

/// Hash one normalized label's UTF-8 bytes.
pub fn labelhash(label: &Label) -> LabelHash {
    LabelHash(keccak256(label.as_str().as_bytes()))
}

/// Normalize raw text as a single label, then hash it.
///
/// # Errors
///
/// Returns [`NameError::InvalidName`] when normalization fails or the
/// text is not a bare label.
pub fn labelhash_str(raw: &str) -> Result<LabelHash, NameError> {
    Ok(labelhash(&Label::new(raw)?))
}

/// Compute the node for a name, folding its labels right-to-left from
/// the all-zero root.
///
/// The name is hashed exactly as given — no default top-level label is
/// appended here. Use [`namehash_str`] for caller-facing text input.
pub fn namehash(name: &Name) -> Node {
    let mut node = *Node::ROOT.as_bytes();
    for label in name.labels().iter().rev() {
        let mut hasher = Keccak256::new();
        hasher.update(node);
        hasher.update(labelhash(label).as_bytes());
        node.copy_from_slice(&hasher.finalize());
    }
    Node(node)
}

/// Parse, normalize, and qualify raw text, then compute its node.
///
/// A name that does not end in a recognized top-level label gets the
/// default appended first, matching what the registry read path expects.
/// The empty string yields the root node unchanged.
///
/// # Errors
///
/// Returns [`NameError::InvalidName`] when normalization fails.
pub fn namehash_str(raw: &str) -> Result<Node, NameError> {
    let name = Name::parse(raw)?.fully_qualified();
    Ok(namehash(&name))
}

/// Hash a bid secret. Only this hash ever travels to the auction
/// contract — at seal time inside the commitment, and again at reveal.
pub fn secret_hash(secret: &[u8]) -> SecretHash {
    SecretHash(keccak256(secret))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Equal canonical names always yield identical nodes.
        #[test]
        fn namehash_deterministic(raw in "[a-z0-9]{1,12}(\\.[a-z0-9]{1,12}){0,3}") {
            let name = Name::parse(&raw).unwrap();
            prop_assert_eq!(namehash(&name), namehash(&name));
        }

        /// Appending a parent label always changes the node.
        #[test]
        fn namehash_parent_extension_changes_node(raw in "[a-z0-9]{1,12}") {
            prop_assume!(!nomen_core::RECOGNIZED_TLDS.contains(&raw.as_str()));
            let bare = Name::parse(&raw).unwrap();
            let qualified = bare.fully_qualified();
            prop_assert_ne!(namehash(&bare), namehash(&qualified));
        }
    }
}
