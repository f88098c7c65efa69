//! # Auction Contract Collaborator
//!
//! The interface of the commit-reveal auction registrar contract that
//! allocates top-level labels. Two design constraints shape this trait:
//!
//! - **The sealed-bid hash is contract-defined.** Historical revisions of
//!   the contract disagree on the commitment's field order and arity, so
//!   the client never recomputes it locally — [`AuctionContract::hash_bid`]
//!   is the single source of truth and must match the chain bit-for-bit.
//! - **Submission is opaque.** The write methods accept pre-validated
//!   arguments and per-call options; all domain validation happens in
//!   `nomen-registrar` before a call reaches this boundary.

use std::sync::Arc;

use nomen_core::{Address, LabelHash, SealedBidHash, SecretHash};

use crate::error::LedgerError;
use crate::types::{CallOptions, RawAuctionEntry, TxId};

/// Interface of the auction registrar contract.
pub trait AuctionContract: Send + Sync {
    /// The raw five-field entry for a label.
    fn entries(&self, label_hash: LabelHash) -> Result<RawAuctionEntry, LedgerError>;

    /// The contract-native sealed-bid commitment over
    /// `(label_hash, bidder, amount, secret_hash)`.
    fn hash_bid(
        &self,
        label_hash: LabelHash,
        bidder: Address,
        amount: u128,
        secret: SecretHash,
    ) -> Result<SealedBidHash, LedgerError>;

    /// The deed holding a bidder's sealed bid, if one was submitted.
    /// `None` means no bid matches `(bidder, sealed)` — revealing such a
    /// combination would burn the bid.
    fn sealed_bid(
        &self,
        bidder: Address,
        sealed: SealedBidHash,
    ) -> Result<Option<Address>, LedgerError>;

    /// Open auctions for a batch of labels.
    fn start_auctions(
        &self,
        label_hashes: &[LabelHash],
        options: &CallOptions,
    ) -> Result<TxId, LedgerError>;

    /// Submit a sealed bid commitment.
    fn new_bid(&self, sealed: SealedBidHash, options: &CallOptions) -> Result<TxId, LedgerError>;

    /// Reveal a previously sealed bid.
    fn unseal_bid(
        &self,
        label_hash: LabelHash,
        value: u128,
        secret: SecretHash,
        options: &CallOptions,
    ) -> Result<TxId, LedgerError>;

    /// Finalize an auction whose reveal window has closed.
    fn finalize_auction(
        &self,
        label_hash: LabelHash,
        options: &CallOptions,
    ) -> Result<TxId, LedgerError>;
}

/// Connects to the auction contract once its address is known.
///
/// The contract's address is not static — it is discovered by asking the
/// registry who owns the registrar's top-level node. `nomen-registrar`
/// performs that lookup during binding and hands the result here.
pub trait AuctionConnector: Send + Sync {
    /// Produce a live handle to the auction contract at `address`.
    fn connect(&self, address: Address) -> Result<Arc<dyn AuctionContract>, LedgerError>;
}
