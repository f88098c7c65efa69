//! # nomen-resolver — Read-Path Name Service
//!
//! Forward and reverse resolution over the registry/resolver
//! collaborators: name to address, address to name, and ownership
//! queries. Every lookup is a pure function of its input plus read-only
//! collaborator calls — no caching, no internal state.
//!
//! ## Record Dispatch
//!
//! Which record a lookup fetches is a closed choice, [`RecordKind`],
//! dispatched by an exhaustive `match`. A new record kind means a new
//! enum variant and a compile error at every dispatch site until it is
//! handled.
//!
//! ## Wiring
//!
//! [`NameService`] receives its collaborator handles explicitly at
//! construction. Tests wire `nomen_ledger::stub::StubLedger`; production
//! wires a live chain client. There is no process-wide default.

use std::fmt;
use std::sync::Arc;

use nomen_core::{Address, NameError};
use nomen_hash::{namehash_str, reverse_name};
use nomen_ledger::{LedgerError, NameRegistry, RecordResolver};
use thiserror::Error;

/// Errors from read-path lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The queried name or identifier is malformed.
    #[error(transparent)]
    Name(#[from] NameError),

    /// A collaborator call failed; passed through unmodified.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Which record a resolution fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// The forward address record.
    Address,
    /// The name record (reverse lookups).
    Name,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address => f.write_str("address"),
            Self::Name => f.write_str("name"),
        }
    }
}

/// A resolved record value, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValue {
    /// A forward address record.
    Address(Address),
    /// A name record.
    Name(String),
}

/// Read-path facade over the registry and resolver collaborators.
pub struct NameService {
    registry: Arc<dyn NameRegistry>,
    resolver: Arc<dyn RecordResolver>,
}

impl NameService {
    /// Build a service over explicit collaborator handles.
    pub fn new(registry: Arc<dyn NameRegistry>, resolver: Arc<dyn RecordResolver>) -> Self {
        Self { registry, resolver }
    }

    /// Resolve a name to its forward address record.
    ///
    /// Returns `None` when the name has no resolver or no record.
    pub fn address(&self, name: &str) -> Result<Option<Address>, ResolveError> {
        match self.resolve(name, RecordKind::Address)? {
            Some(RecordValue::Address(address)) => Ok(Some(address)),
            _ => Ok(None),
        }
    }

    /// Reverse-resolve an address to its registered name.
    ///
    /// Looks up the name record under the address's fixed
    /// `<hex>.addr.reverse` position.
    pub fn name(&self, address: &Address) -> Result<Option<String>, ResolveError> {
        let reversed = reverse_name(address).to_string();
        match self.resolve(&reversed, RecordKind::Name)? {
            Some(RecordValue::Name(name)) => Ok(Some(name)),
            _ => Ok(None),
        }
    }

    /// The current owner of a name's node, if any.
    pub fn owner(&self, name: &str) -> Result<Option<Address>, ResolveError> {
        let node = namehash_str(name)?;
        Ok(self.registry.owner(node)?)
    }

    /// The resolver contract responsible for a name, if any.
    pub fn resolver_of(&self, name: &str) -> Result<Option<Address>, ResolveError> {
        let node = namehash_str(name)?;
        Ok(self.registry.resolver(node)?)
    }

    /// Resolve one record kind for a name.
    ///
    /// The name is normalized and default-TLD-qualified, then its node is
    /// checked for a registered resolver; without one the lookup is
    /// `None` without touching the resolver collaborator.
    pub fn resolve(
        &self,
        name: &str,
        kind: RecordKind,
    ) -> Result<Option<RecordValue>, ResolveError> {
        let node = namehash_str(name)?;
        if self.registry.resolver(node)?.is_none() {
            tracing::debug!(%name, %kind, "no resolver registered for node");
            return Ok(None);
        }
        let value = match kind {
            RecordKind::Address => self
                .resolver
                .address_record(node)?
                .map(RecordValue::Address),
            RecordKind::Name => self.resolver.name_record(node)?.map(RecordValue::Name),
        };
        tracing::debug!(%name, %kind, found = value.is_some(), "resolved record");
        Ok(value)
    }
}
