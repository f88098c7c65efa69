//! # nomen-hash — Node Hashing
//!
//! Computes the hash values that address the Nomen registry:
//!
//! - **Keccak-256** is the ledger's native hash primitive; every hash in
//!   this crate is Keccak-256 over a defined byte encoding.
//! - **`labelhash`** hashes one normalized label's UTF-8 bytes.
//! - **`namehash`** folds a name's labels right-to-left into a 32-byte
//!   node, starting from the all-zero root. Equal canonical names always
//!   produce equal nodes — the registry relies on the node as its record
//!   key.
//! - **`reverse_name`** derives the fixed `<hex>.addr.reverse` name under
//!   which reverse records live for a ledger address.
//!
//! The one hash this crate deliberately does NOT compute is the sealed
//! bid commitment: that hash is contract-defined and is always obtained
//! from the auction contract's own entry point (see `nomen-ledger`).
//!
//! ## Crate Policy
//!
//! - Pure functions only — no I/O, no collaborator calls, no shared state.
//!   Safe to call concurrently without synchronization.
//! - Depends only on `nomen-core` internally.

pub mod keccak;
pub mod namehash;
pub mod reverse;

pub use keccak::keccak256;
pub use namehash::{labelhash, labelhash_str, namehash, namehash_str, secret_hash};
pub use reverse::{reverse_name, reverse_name_str, reverse_node};
