//! # nomen-ledger — External Collaborator Contracts
//!
//! Defines the trait boundary between the Nomen core and the ledger it
//! reads: the name registry, the record resolver, the auction contract,
//! and the chain itself. Everything behind these traits — transaction
//! transport, ABI encoding, gas estimation against a live chain, account
//! management — is an implementation concern and never leaks into the
//! rest of the workspace.
//!
//! ## Architecture
//!
//! Each collaborator is an object-safe `Send + Sync` trait, so production
//! deployments can wire a live chain client while tests wire the
//! in-memory [`stub::StubLedger`]. Components receive their collaborator
//! handles explicitly at construction (`Arc<dyn Trait>`); there is no
//! process-wide default client.
//!
//! ## Error Policy
//!
//! [`LedgerError`] classifies collaborator faults (transport, contract
//! call, nonsensical on-chain data) and passes them through unmodified —
//! this crate never masks or reinterprets a collaborator failure.

pub mod auction;
pub mod chain;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod stub;
pub mod types;

pub use auction::{AuctionConnector, AuctionContract};
pub use chain::ChainReader;
pub use error::LedgerError;
pub use registry::NameRegistry;
pub use resolver::RecordResolver;
pub use types::{CallOptions, RawAuctionEntry, TxId};
