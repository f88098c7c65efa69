//! # Collaborator Error Classification
//!
//! Faults that originate outside the Nomen core: the transport failed,
//! a contract call failed, or the chain returned data the client does
//! not understand. These pass through to callers unmodified — retry and
//! backoff policy belongs to the transport implementation, not here.

use thiserror::Error;

/// Errors from external collaborator calls.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The underlying transport failed before the call reached the chain.
    #[error("transport failure during {operation}: {reason}")]
    Transport {
        /// The operation being attempted (e.g. "owner", "entries").
        operation: String,
        /// Transport-level description of the failure.
        reason: String,
    },

    /// A contract call was submitted and rejected or reverted.
    #[error("contract call {method} failed: {reason}")]
    Contract {
        /// The contract method that failed.
        method: String,
        /// Contract-level description of the failure.
        reason: String,
    },

    /// The chain returned a value the client cannot interpret, such as
    /// an auction status code outside the known range.
    #[error("unexpected on-chain value for {field}: {value}")]
    UnexpectedValue {
        /// The field that carried the value.
        field: &'static str,
        /// The uninterpretable value, rendered for diagnostics.
        value: String,
    },
}
