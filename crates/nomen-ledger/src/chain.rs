//! # Chain Reader Collaborator
//!
//! Read-only view of chain-level state the core needs for admission
//! control. Kept separate from the contract traits because it reads the
//! chain itself, not a deployed contract.

use crate::error::LedgerError;

/// Read interface for chain-level limits.
pub trait ChainReader: Send + Sync {
    /// The current per-block execution budget. Batched operations are
    /// checked against this ceiling before submission.
    fn gas_limit(&self) -> Result<u64, LedgerError>;
}
