//! # The Auction Registrar
//!
//! Client engine for the commit-reveal auction, built as a two-state
//! machine: a [`Detached`] registrar holds collaborator handles, and
//! [`Registrar::bind`] promotes it to [`Bound`] once the auction
//! contract's address has been discovered from the registry. Every
//! auction operation lives on the bound state only — there is no
//! half-connected registrar with a nullable contract field.
//!
//! ## Precondition Checks
//!
//! All domain validation happens here, synchronously, before anything is
//! submitted: sender presence, the minimum bid floor, reveal-matches-seal,
//! batch gas admission, and label depth. A call that reaches the
//! contract trait has already passed every check this client can make.

use std::sync::Arc;

use thiserror::Error;

use nomen_core::{Address, Label, LabelHash, Name, NameError, SealedBidHash};
use nomen_hash::{labelhash, namehash_str, secret_hash};
use nomen_ledger::{
    AuctionConnector, AuctionContract, CallOptions, ChainReader, LedgerError, NameRegistry, TxId,
};

use crate::entry::AuctionEntry;
use crate::gas::GasSchedule;
use crate::status::AuctionStatus;

/// The top-level name whose direct children this registrar auctions.
pub const REGISTRAR_TLD: &str = "eth";

/// Minimum acceptable bid: 0.01 ether, in wei.
pub const MIN_BID_WEI: u128 = 10_000_000_000_000_000;

/// Errors from auction operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrarError {
    /// A bid or reveal was attempted without a sending account. The
    /// sealed commitment binds the bidder's identity, so there is no
    /// sensible default to fall back to.
    #[error("a sending account must be specified to create or reveal a bid")]
    MissingSender,

    /// The bid amount is below the contract's minimum.
    #[error("bid of {offered} wei is below the minimum of {minimum} wei")]
    BidTooLow {
        /// The amount the caller offered, in wei.
        offered: u128,
        /// The contract's bid floor, in wei.
        minimum: u128,
    },

    /// The name has more than two levels. This registrar manages only
    /// direct children of its top-level name.
    #[error("{name:?} is a subdomain; the registrar manages only direct children of .{REGISTRAR_TLD}")]
    UnsupportedDepth {
        /// The offending name.
        name: String,
    },

    /// The name is qualified under a different top-level name.
    #[error("{name:?} is not under .{tld}; this registrar only manages .{tld} names")]
    NotRegistrarName {
        /// The offending name.
        name: String,
        /// The top-level label the name actually carries.
        tld: String,
    },

    /// `start_auctions` was called with no names.
    #[error("at least one name is required to start auctions")]
    EmptyBatch,

    /// The batch's gas requirement exceeds the chain's per-block
    /// ceiling; it could never execute. Shrink the batch and resubmit.
    #[error("batch requires {required} gas but the block ceiling is {ceiling}; start fewer auctions")]
    BatchTooLarge {
        /// Gas the batch would need.
        required: u64,
        /// The chain's current per-block limit.
        ceiling: u64,
    },

    /// No sealed bid matches the recomputed commitment. Submitting the
    /// reveal anyway would burn the bid irrecoverably, so it is refused
    /// here. The label, value, secret, or sender does not match what
    /// was sealed.
    #[error("no sealed bid found for {bidder} matching this label, value, and secret")]
    InvalidBidHash {
        /// The account whose sealed bids were searched.
        bidder: Address,
    },

    /// The registry reports no owner for the registrar's top-level
    /// node; there is no auction contract to bind to.
    #[error("the auction registrar contract is not deployed (no owner for .{REGISTRAR_TLD})")]
    RegistrarUnavailable,

    /// Malformed caller input.
    #[error(transparent)]
    Name(#[from] NameError),

    /// A collaborator call failed; passed through unmodified.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

mod private {
    pub trait Sealed {}
    impl Sealed for super::Detached {}
    impl Sealed for super::Bound {}
}

/// Marker trait for the registrar's two binding states.
///
/// Sealed — only [`Detached`] and [`Bound`] implement it.
pub trait BindingState: private::Sealed {}

/// Registrar state: collaborator handles held, contract not yet
/// discovered.
pub struct Detached {
    registry: Arc<dyn NameRegistry>,
    connector: Arc<dyn AuctionConnector>,
}

/// Registrar state: live auction contract handle in hand.
pub struct Bound {
    contract: Arc<dyn AuctionContract>,
}

impl BindingState for Detached {}
impl BindingState for Bound {}

/// The commit-reveal auction registrar.
pub struct Registrar<S: BindingState> {
    chain: Arc<dyn ChainReader>,
    gas: GasSchedule,
    state: S,
}

impl Registrar<Detached> {
    /// Build a detached registrar over explicit collaborator handles.
    pub fn new(
        registry: Arc<dyn NameRegistry>,
        connector: Arc<dyn AuctionConnector>,
        chain: Arc<dyn ChainReader>,
    ) -> Self {
        Self {
            chain,
            gas: GasSchedule::default(),
            state: Detached {
                registry,
                connector,
            },
        }
    }

    /// Override the default gas schedule.
    pub fn with_gas_schedule(mut self, gas: GasSchedule) -> Self {
        self.gas = gas;
        self
    }

    /// Discover the auction contract and bind to it.
    ///
    /// The registry's owner of the `eth` node IS the auction contract;
    /// a successful lookup promotes this registrar to [`Bound`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistrarError::RegistrarUnavailable`] when the node
    /// has no owner, or a passed-through [`LedgerError`] when the
    /// lookup itself fails.
    pub fn bind(self) -> Result<Registrar<Bound>, RegistrarError> {
        let node = namehash_str(REGISTRAR_TLD)?;
        let owner = self
            .state
            .registry
            .owner(node)?
            .ok_or(RegistrarError::RegistrarUnavailable)?;
        tracing::debug!(contract = %owner, "binding auction registrar");
        let contract = self.state.connector.connect(owner)?;
        Ok(Registrar {
            chain: self.chain,
            gas: self.gas,
            state: Bound { contract },
        })
    }
}

impl Registrar<Bound> {
    /// The classified auction entry for a label or `label.eth` name.
    pub fn entries(&self, name: &str) -> Result<AuctionEntry, RegistrarError> {
        let label = to_label(name)?;
        self.entries_by_hash(labelhash(&label))
    }

    /// The classified auction entry for a precomputed label hash.
    pub fn entries_by_hash(&self, label_hash: LabelHash) -> Result<AuctionEntry, RegistrarError> {
        let raw = self.state.contract.entries(label_hash)?;
        Ok(AuctionEntry::from_raw(raw)?)
    }

    /// The lifecycle status of a label or `label.eth` name.
    pub fn status(&self, name: &str) -> Result<AuctionStatus, RegistrarError> {
        Ok(self.entries(name)?.status)
    }

    /// Start auctions for a batch of labels.
    ///
    /// When the caller sets no gas budget, the linear schedule
    /// (`start_base + start_marginal × n`) fills one in. Either way the
    /// budget is checked against the chain's per-block ceiling before
    /// submission — a batch that cannot fit is rejected here rather
    /// than submitted to fail.
    pub fn start_auctions(
        &self,
        names: &[&str],
        options: CallOptions,
    ) -> Result<TxId, RegistrarError> {
        if names.is_empty() {
            return Err(RegistrarError::EmptyBatch);
        }
        let required = options.gas.unwrap_or_else(|| self.gas.start_batch(names.len()));
        let ceiling = self.chain.gas_limit()?;
        if required > ceiling {
            return Err(RegistrarError::BatchTooLarge { required, ceiling });
        }
        let label_hashes = names
            .iter()
            .map(|name| Ok(labelhash(&to_label(name)?)))
            .collect::<Result<Vec<_>, RegistrarError>>()?;
        let options = CallOptions {
            gas: Some(required),
            ..options
        };
        tracing::debug!(batch = names.len(), gas = required, "starting auctions");
        Ok(self.state.contract.start_auctions(&label_hashes, &options)?)
    }

    /// Compute the sealed commitment for a bid, via the contract's own
    /// hash entry point.
    ///
    /// Keep the secret: without it the bid can never be revealed and
    /// the escrowed funds are forfeit.
    pub fn seal_bid(
        &self,
        name: &str,
        bidder: Address,
        amount: u128,
        secret: &[u8],
    ) -> Result<SealedBidHash, RegistrarError> {
        if amount < MIN_BID_WEI {
            return Err(RegistrarError::BidTooLow {
                offered: amount,
                minimum: MIN_BID_WEI,
            });
        }
        let label = to_label(name)?;
        let sealed = self.state.contract.hash_bid(
            labelhash(&label),
            bidder,
            amount,
            secret_hash(secret),
        )?;
        Ok(sealed)
    }

    /// Seal and submit a bid.
    ///
    /// The sending account is required — it is part of the sealed
    /// commitment — and the amount must clear the minimum bid floor.
    /// Returns the commitment along with the submission handle; the
    /// caller must retain the commitment's inputs to reveal later.
    pub fn bid(
        &self,
        name: &str,
        amount: u128,
        secret: &[u8],
        options: CallOptions,
    ) -> Result<(SealedBidHash, TxId), RegistrarError> {
        let bidder = options.sender.ok_or(RegistrarError::MissingSender)?;
        let sealed = self.seal_bid(name, bidder, amount, secret)?;
        let options = self.with_default_gas(options, self.gas.bid);
        tracing::debug!(%bidder, sealed = %sealed, "submitting sealed bid");
        let tx = self.state.contract.new_bid(sealed, &options)?;
        Ok((sealed, tx))
    }

    /// Reveal a previously sealed bid.
    ///
    /// The commitment is recomputed from `(label, value, secret, sender)`
    /// and checked against the contract's sealed-bid records **before**
    /// submission: a reveal that matches nothing would burn the bid, so
    /// a mismatch is refused client-side with
    /// [`RegistrarError::InvalidBidHash`].
    pub fn reveal(
        &self,
        name: &str,
        value: u128,
        secret: &[u8],
        options: CallOptions,
    ) -> Result<TxId, RegistrarError> {
        let bidder = options.sender.ok_or(RegistrarError::MissingSender)?;
        let label = to_label(name)?;
        let label_hash = labelhash(&label);
        let secret = secret_hash(secret);
        let sealed = self
            .state
            .contract
            .hash_bid(label_hash, bidder, value, secret)?;
        if self.state.contract.sealed_bid(bidder, sealed)?.is_none() {
            return Err(RegistrarError::InvalidBidHash { bidder });
        }
        let options = self.with_default_gas(options, self.gas.reveal);
        tracing::debug!(%bidder, label = %label, "revealing sealed bid");
        Ok(self
            .state
            .contract
            .unseal_bid(label_hash, value, secret, &options)?)
    }

    /// Alias for [`Registrar::reveal`], matching the contract's
    /// `unsealBid` terminology.
    pub fn unseal(
        &self,
        name: &str,
        value: u128,
        secret: &[u8],
        options: CallOptions,
    ) -> Result<TxId, RegistrarError> {
        self.reveal(name, value, secret, options)
    }

    /// Finalize an auction whose reveal window has closed.
    pub fn finalize(&self, name: &str, options: CallOptions) -> Result<TxId, RegistrarError> {
        let label = to_label(name)?;
        let options = self.with_default_gas(options, self.gas.finalize);
        tracing::debug!(label = %label, "finalizing auction");
        Ok(self
            .state
            .contract
            .finalize_auction(labelhash(&label), &options)?)
    }

    fn with_default_gas(&self, options: CallOptions, default: u64) -> CallOptions {
        CallOptions {
            gas: Some(options.gas.unwrap_or(default)),
            ..options
        }
    }
}

/// Reduce caller input to the label the registrar auctions.
///
/// Accepts a bare label (`tickets`) or a two-level name under the
/// registrar's top-level name (`tickets.eth`). Deeper names are
/// rejected — the registrar does not manage subdomains of its children
/// — as are names under a different top-level name.
fn to_label(raw: &str) -> Result<Label, RegistrarError> {
    let name = Name::parse(raw)?;
    let labels = name.labels();
    match labels {
        [] => Err(RegistrarError::Name(NameError::InvalidName {
            name: raw.to_string(),
            reason: "a label is required".to_string(),
        })),
        [label] => Ok(label.clone()),
        [label, tld] if tld.as_str() == REGISTRAR_TLD => Ok(label.clone()),
        [_, tld] => Err(RegistrarError::NotRegistrarName {
            name: raw.to_string(),
            tld: tld.as_str().to_string(),
        }),
        _ => Err(RegistrarError::UnsupportedDepth {
            name: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nomen_hash::labelhash_str;
    use nomen_ledger::stub::{StubLedger, SubmittedCall};
    use nomen_ledger::RawAuctionEntry;

    fn bidder() -> Address {
        Address([0x01; 20])
    }

    fn registrar_owner() -> Address {
        Address([0x09; 20])
    }

    /// A stub with the registrar contract "deployed" and a registrar
    /// bound to it.
    fn bound(stub: &StubLedger) -> Registrar<Bound> {
        stub.set_owner(namehash_str(REGISTRAR_TLD).unwrap(), registrar_owner());
        Registrar::new(
            Arc::new(stub.clone()),
            Arc::new(stub.clone()),
            Arc::new(stub.clone()),
        )
        .bind()
        .unwrap()
    }

    // ---- binding ----

    #[test]
    fn test_bind_requires_deployed_registrar() {
        let stub = StubLedger::new();
        let detached = Registrar::new(
            Arc::new(stub.clone()),
            Arc::new(stub.clone()),
            Arc::new(stub),
        );
        assert!(matches!(
            detached.bind(),
            Err(RegistrarError::RegistrarUnavailable)
        ));
    }

    #[test]
    fn test_bind_succeeds_with_owner() {
        let stub = StubLedger::new();
        let registrar = bound(&stub);
        // A bound registrar can reach the contract.
        assert!(registrar.entries("anything").is_ok());
    }

    // ---- label reduction ----

    #[test]
    fn test_entries_label_and_name_equivalent() {
        let stub = StubLedger::new();
        stub.set_entry(
            labelhash_str("grail").unwrap(),
            RawAuctionEntry {
                status_code: 2,
                deed: Address([0x02; 20]),
                registration_date: 7200,
                deposit: 10,
                highest_bid: 20,
            },
        );
        let registrar = bound(&stub);
        assert_eq!(
            registrar.entries("grail").unwrap(),
            registrar.entries("grail.eth").unwrap()
        );
    }

    #[test]
    fn test_entries_rejects_subdomain() {
        let stub = StubLedger::new();
        let registrar = bound(&stub);
        assert!(matches!(
            registrar.entries("holy.grail.eth"),
            Err(RegistrarError::UnsupportedDepth { .. })
        ));
    }

    #[test]
    fn test_entries_rejects_foreign_tld() {
        let stub = StubLedger::new();
        let registrar = bound(&stub);
        assert!(matches!(
            registrar.entries("grail.test"),
            Err(RegistrarError::NotRegistrarName { .. })
        ));
    }

    #[test]
    fn test_entries_rejects_empty() {
        let stub = StubLedger::new();
        let registrar = bound(&stub);
        assert!(registrar.entries("").is_err());
    }

    // ---- classification ----

    #[test]
    fn test_status_classification_in_order() {
        let stub = StubLedger::new();
        let registrar = bound(&stub);
        let expected = [
            AuctionStatus::Open,
            AuctionStatus::Auction,
            AuctionStatus::Owned,
            AuctionStatus::Forbidden,
            AuctionStatus::Reveal,
            AuctionStatus::NotYetAvailable,
        ];
        for (code, status) in expected.iter().enumerate() {
            stub.set_entry(
                labelhash_str("grail").unwrap(),
                RawAuctionEntry {
                    status_code: code as u8,
                    ..RawAuctionEntry::empty()
                },
            );
            assert_eq!(registrar.status("grail").unwrap(), *status);
        }
    }

    // ---- batch admission ----

    #[test]
    fn test_start_auctions_rejects_empty_batch() {
        let stub = StubLedger::new();
        let registrar = bound(&stub);
        assert!(matches!(
            registrar.start_auctions(&[], CallOptions::new()),
            Err(RegistrarError::EmptyBatch)
        ));
    }

    #[test]
    fn test_start_auctions_over_ceiling_rejected() {
        let stub = StubLedger::new();
        stub.set_gas_limit(1_000_000);
        let registrar = bound(&stub);
        // 26 names: 25_000 + 39_000 × 26 = 1_039_000 > 1_000_000.
        let names: Vec<String> = (0..26).map(|i| format!("name{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let result = registrar.start_auctions(&refs, CallOptions::new());
        assert!(matches!(
            result,
            Err(RegistrarError::BatchTooLarge {
                required: 1_039_000,
                ceiling: 1_000_000
            })
        ));
        assert!(stub.submitted_calls().is_empty());
    }

    #[test]
    fn test_start_auctions_under_ceiling_submits() {
        let stub = StubLedger::new();
        stub.set_gas_limit(1_000_000);
        let registrar = bound(&stub);
        // 24 names: 25_000 + 39_000 × 24 = 961_000 ≤ 1_000_000.
        let names: Vec<String> = (0..24).map(|i| format!("name{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        registrar.start_auctions(&refs, CallOptions::new()).unwrap();

        let calls = stub.submitted_calls();
        assert_eq!(calls.len(), 1);
        match &calls[0] {
            SubmittedCall::StartAuctions {
                label_hashes,
                options,
            } => {
                assert_eq!(label_hashes.len(), 24);
                assert_eq!(label_hashes[0], labelhash_str("name0").unwrap());
                assert_eq!(options.gas, Some(961_000));
            }
            other => panic!("unexpected call: {other:?}"),
        }
    }

    #[test]
    fn test_start_auctions_caller_gas_respected() {
        let stub = StubLedger::new();
        stub.set_gas_limit(1_000_000);
        let registrar = bound(&stub);
        registrar
            .start_auctions(&["tickets"], CallOptions::new().with_gas(77_000))
            .unwrap();
        match &stub.submitted_calls()[0] {
            SubmittedCall::StartAuctions { options, .. } => {
                assert_eq!(options.gas, Some(77_000));
            }
            other => panic!("unexpected call: {other:?}"),
        }
    }

    #[test]
    fn test_start_auctions_caller_gas_checked_against_ceiling() {
        let stub = StubLedger::new();
        stub.set_gas_limit(1_000_000);
        let registrar = bound(&stub);
        assert!(matches!(
            registrar.start_auctions(&["tickets"], CallOptions::new().with_gas(2_000_000)),
            Err(RegistrarError::BatchTooLarge { .. })
        ));
    }

    // ---- bidding ----

    #[test]
    fn test_bid_requires_sender() {
        let stub = StubLedger::new();
        let registrar = bound(&stub);
        assert!(matches!(
            registrar.bid("tickets", MIN_BID_WEI, b"s3cr3t", CallOptions::new()),
            Err(RegistrarError::MissingSender)
        ));
    }

    #[test]
    fn test_bid_enforces_floor() {
        let stub = StubLedger::new();
        let registrar = bound(&stub);
        let result = registrar.bid(
            "tickets",
            MIN_BID_WEI - 1,
            b"s3cr3t",
            CallOptions::from_sender(bidder()),
        );
        assert!(matches!(
            result,
            Err(RegistrarError::BidTooLow { minimum: MIN_BID_WEI, .. })
        ));
    }

    #[test]
    fn test_bid_seals_via_contract_hash() {
        let stub = StubLedger::new();
        let registrar = bound(&stub);
        let amount = 1_000_000_000_000_000_000_000u128; // 10^21 wei
        let (sealed, _tx) = registrar
            .bid(
                "tickets",
                amount,
                b"s3cr3t",
                CallOptions::from_sender(bidder()),
            )
            .unwrap();

        // Byte-for-byte agreement with the contract's own hash entry point.
        let expected = stub
            .hash_bid(
                labelhash_str("tickets").unwrap(),
                bidder(),
                amount,
                secret_hash(b"s3cr3t"),
            )
            .unwrap();
        assert_eq!(sealed, expected);
    }

    #[test]
    fn test_bid_normalizes_and_reduces_name() {
        let stub = StubLedger::new();
        let registrar = bound(&stub);
        let options = CallOptions::from_sender(bidder());
        let (from_unicode, _) = registrar
            .bid("Öbb.eth", MIN_BID_WEI, b"s", options.clone())
            .unwrap();
        let (from_label, _) = registrar.bid("öbb", MIN_BID_WEI, b"s", options).unwrap();
        assert_eq!(from_unicode, from_label);
    }

    #[test]
    fn test_bid_fills_default_gas() {
        let stub = StubLedger::new();
        let registrar = bound(&stub);
        registrar
            .bid(
                "tickets",
                MIN_BID_WEI,
                b"s3cr3t",
                CallOptions::from_sender(bidder()),
            )
            .unwrap();
        match &stub.submitted_calls()[0] {
            SubmittedCall::NewBid { options, .. } => {
                assert_eq!(options.gas, Some(500_000));
                assert_eq!(options.sender, Some(bidder()));
            }
            other => panic!("unexpected call: {other:?}"),
        }
    }

    #[test]
    fn test_seal_bid_without_submission() {
        let stub = StubLedger::new();
        let registrar = bound(&stub);
        let sealed = registrar
            .seal_bid("tickets", bidder(), MIN_BID_WEI, b"s3cr3t")
            .unwrap();
        assert_eq!(sealed.as_bytes().len(), 32);
        // Sealing alone submits nothing.
        assert!(stub.submitted_calls().is_empty());
    }

    // ---- reveal ----

    #[test]
    fn test_reveal_requires_sender() {
        let stub = StubLedger::new();
        let registrar = bound(&stub);
        assert!(matches!(
            registrar.reveal("tickets", MIN_BID_WEI, b"s3cr3t", CallOptions::new()),
            Err(RegistrarError::MissingSender)
        ));
    }

    #[test]
    fn test_reveal_without_prior_seal_refused() {
        let stub = StubLedger::new();
        let registrar = bound(&stub);
        let result = registrar.reveal(
            "tickets",
            MIN_BID_WEI,
            b"s3cr3t",
            CallOptions::from_sender(bidder()),
        );
        assert!(matches!(
            result,
            Err(RegistrarError::InvalidBidHash { .. })
        ));
        // Nothing was submitted — the bid is not burned.
        assert!(stub.submitted_calls().is_empty());
    }

    #[test]
    fn test_reveal_after_bid_submits() {
        let stub = StubLedger::new();
        let registrar = bound(&stub);
        let options = CallOptions::from_sender(bidder());
        registrar
            .bid("tickets", MIN_BID_WEI, b"s3cr3t", options.clone())
            .unwrap();
        registrar
            .reveal("tickets", MIN_BID_WEI, b"s3cr3t", options)
            .unwrap();

        let calls = stub.submitted_calls();
        assert_eq!(calls.len(), 2);
        match &calls[1] {
            SubmittedCall::UnsealBid {
                label_hash,
                value,
                secret,
                options,
            } => {
                assert_eq!(*label_hash, labelhash_str("tickets").unwrap());
                assert_eq!(*value, MIN_BID_WEI);
                assert_eq!(*secret, secret_hash(b"s3cr3t"));
                assert_eq!(options.gas, Some(150_000));
            }
            other => panic!("unexpected call: {other:?}"),
        }
    }

    #[test]
    fn test_reveal_wrong_value_refused() {
        let stub = StubLedger::new();
        let registrar = bound(&stub);
        let options = CallOptions::from_sender(bidder());
        registrar
            .bid("tickets", MIN_BID_WEI * 2, b"s3cr3t", options.clone())
            .unwrap();
        // Different value, different commitment, no match.
        assert!(matches!(
            registrar.reveal("tickets", MIN_BID_WEI, b"s3cr3t", options),
            Err(RegistrarError::InvalidBidHash { .. })
        ));
    }

    #[test]
    fn test_reveal_wrong_sender_refused() {
        let stub = StubLedger::new();
        let registrar = bound(&stub);
        registrar
            .bid(
                "tickets",
                MIN_BID_WEI,
                b"s3cr3t",
                CallOptions::from_sender(bidder()),
            )
            .unwrap();
        let other = Address([0x02; 20]);
        assert!(matches!(
            registrar.reveal(
                "tickets",
                MIN_BID_WEI,
                b"s3cr3t",
                CallOptions::from_sender(other)
            ),
            Err(RegistrarError::InvalidBidHash { bidder }) if bidder == other
        ));
    }

    #[test]
    fn test_unseal_is_reveal() {
        let stub = StubLedger::new();
        let registrar = bound(&stub);
        let options = CallOptions::from_sender(bidder());
        registrar
            .bid("tickets", MIN_BID_WEI, b"s3cr3t", options.clone())
            .unwrap();
        registrar
            .unseal("tickets", MIN_BID_WEI, b"s3cr3t", options)
            .unwrap();
        assert!(matches!(
            stub.submitted_calls()[1],
            SubmittedCall::UnsealBid { .. }
        ));
    }

    // ---- finalize ----

    #[test]
    fn test_finalize_reduces_name_and_fills_gas() {
        let stub = StubLedger::new();
        let registrar = bound(&stub);
        registrar
            .finalize("theycallmetim.eth", CallOptions::new())
            .unwrap();
        match &stub.submitted_calls()[0] {
            SubmittedCall::FinalizeAuction {
                label_hash,
                options,
            } => {
                assert_eq!(*label_hash, labelhash_str("theycallmetim").unwrap());
                assert_eq!(options.gas, Some(120_000));
            }
            other => panic!("unexpected call: {other:?}"),
        }
    }
}
