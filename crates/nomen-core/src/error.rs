//! # Error Types — Caller-Fault Taxonomy
//!
//! Defines the errors raised when caller-supplied input is malformed.
//! These are never retried and never deferred: they surface synchronously
//! at the point of normalization or parsing.
//!
//! Precondition violations on the auction write path (missing sender,
//! underfloor bids, batch sizing) live in `nomen-registrar`; collaborator
//! faults live in `nomen-ledger`. Each failure kind stays distinct so
//! callers can branch on it.

use thiserror::Error;

/// Errors for malformed caller input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// The input is not a valid name under the UTS-46 normalization
    /// profile, or a label normalized to empty where a non-empty label
    /// is required.
    #[error("invalid name {name:?}: {reason}")]
    InvalidName {
        /// The offending input, as supplied by the caller.
        name: String,
        /// Why the input was rejected.
        reason: String,
    },

    /// The input is not a valid fixed-length ledger identifier.
    #[error("invalid identifier {input:?}: {reason}")]
    InvalidIdentifier {
        /// The offending input, as supplied by the caller.
        input: String,
        /// Why the input was rejected.
        reason: String,
    },
}
