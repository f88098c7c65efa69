//! # nomen-core — Foundational Types for the Nomen Registry Client
//!
//! This crate is the bedrock of the Nomen stack. It defines the value types
//! shared by every other crate in the workspace and depends on nothing
//! internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `Label`, `Name`, `Node`,
//!    `LabelHash`, `SealedBidHash`, `SecretHash`, `Address` — all newtypes
//!    with validated constructors. No bare strings for names, no bare byte
//!    arrays for hashes.
//!
//! 2. **Normalization at the boundary.** A `Label` or `Name` can only be
//!    constructed through the UTS-46 normalization pipeline in
//!    [`normalize`]. Once a value exists, it is canonical; downstream
//!    hashing never re-normalizes.
//!
//! 3. **UTC-only timestamps.** [`Timestamp`] carries UTC at seconds
//!    precision, rendered as `YYYY-MM-DDTHH:MM:SSZ`. Ledger registration
//!    dates arrive as epoch seconds and convert losslessly.
//!
//! 4. **Caller-fault errors are synchronous.** [`NameError`] is raised at
//!    the point of computation — malformed input never travels further
//!    into the system.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `nomen-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public value types derive `Debug`, `Clone`, `Serialize`, `Deserialize`.

pub mod address;
pub mod error;
pub mod name;
pub mod node;
pub mod normalize;
pub mod temporal;

pub use address::Address;
pub use error::NameError;
pub use name::{Label, Name, DEFAULT_TLD, RECOGNIZED_TLDS};
pub use node::{LabelHash, Node, SealedBidHash, SecretHash};
pub use normalize::normalize;
pub use temporal::Timestamp;
