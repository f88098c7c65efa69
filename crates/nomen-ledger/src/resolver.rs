//! # Record Resolver Collaborator
//!
//! Resolver contracts hold the records a node points at: a forward
//! address record, or a name record for reverse lookups.

use nomen_core::{Address, Node};

use crate::error::LedgerError;

/// Read interface of a resolver contract.
pub trait RecordResolver: Send + Sync {
    /// The address record for a node, if one is set.
    fn address_record(&self, node: Node) -> Result<Option<Address>, LedgerError>;

    /// The name record for a node, used by reverse lookups.
    fn name_record(&self, node: Node) -> Result<Option<String>, LedgerError>;
}
