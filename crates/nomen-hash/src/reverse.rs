//! # Reverse-Name Construction
//!
//! Reverse records live under a fixed two-label suffix: the record for
//! address `0x1111…1111` is named
//! `1111111111111111111111111111111111111111.addr.reverse`. This module
//! derives that name (and its node) from a raw address or its hex text.

use nomen_core::{Address, Name, NameError, Node};

use crate::namehash::namehash;

/// The fixed suffix under which reverse records live.
const REVERSE_SUFFIX: &str = "addr.reverse";

/// The canonical reverse-lookup name for an address.
pub fn reverse_name(address: &Address) -> Name {
    let dotted = format!("{}.{}", address.to_hex(), REVERSE_SUFFIX);
    // Lowercase hex and the fixed suffix are already canonical; parsing
    // an address-derived name cannot fail.
    Name::parse(&dotted).expect("address hex is always a valid label")
}

/// The canonical reverse-lookup name for an identifier in hex text form,
/// with or without a `0x` prefix, any case.
///
/// # Errors
///
/// Returns [`NameError::InvalidIdentifier`] when the text is not a valid
/// fixed-length address.
pub fn reverse_name_str(text: &str) -> Result<Name, NameError> {
    Ok(reverse_name(&Address::parse(text)?))
}

/// The node of an address's reverse-lookup name.
pub fn reverse_node(address: &Address) -> Node {
    namehash(&reverse_name(address))
}
