//! # Name Registry Collaborator
//!
//! The on-chain registry maps nodes to owners and resolver contracts.
//! Implementations translate these calls onto a live chain client; the
//! stub implements them over in-memory maps.

use nomen_core::{Address, Node};

use crate::error::LedgerError;

/// Read interface of the hierarchical name registry contract.
///
/// Implementations must be `Send + Sync` so they can be shared across
/// threads behind an `Arc`. The trait is object-safe to support runtime
/// selection (stub vs. live).
pub trait NameRegistry: Send + Sync {
    /// Current owner of a node. The contract's all-zero sentinel is
    /// mapped to `None` — an unowned node has no owner, not a zero one.
    fn owner(&self, node: Node) -> Result<Option<Address>, LedgerError>;

    /// Resolver contract responsible for a node's records, if any.
    fn resolver(&self, node: Node) -> Result<Option<Address>, LedgerError>;
}
