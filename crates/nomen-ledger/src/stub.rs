//! # Stub Ledger — In-Memory Collaborator Double
//!
//! Implements every collaborator trait over in-memory maps, with a
//! journal of submitted write calls so tests can assert on exactly what
//! would have reached the chain. This is the shared test double for the
//! resolver and registrar crates and a development backend for running
//! without a chain.
//!
//! ## Bid Hash Convention
//!
//! The real sealed-bid hash is contract-defined and taken from the live
//! contract's own entry point. The stub needs *some* deterministic
//! convention, so it hashes `labelhash ‖ bidder ‖ amount(BE) ‖ secret_hash`
//! with Keccak-256. Nothing outside this module may depend on that choice.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use nomen_core::{Address, LabelHash, Node, SealedBidHash, SecretHash};
use nomen_hash::keccak256;

use crate::auction::{AuctionConnector, AuctionContract};
use crate::chain::ChainReader;
use crate::error::LedgerError;
use crate::registry::NameRegistry;
use crate::resolver::RecordResolver;
use crate::types::{CallOptions, RawAuctionEntry, TxId};

/// Default per-block gas limit for the stub chain.
const DEFAULT_GAS_LIMIT: u64 = 8_000_000;

/// A write call recorded by the stub instead of being submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmittedCall {
    /// `start_auctions` submission.
    StartAuctions {
        /// Labels the batch would open.
        label_hashes: Vec<LabelHash>,
        /// Options the call carried.
        options: CallOptions,
    },
    /// `new_bid` submission.
    NewBid {
        /// The sealed commitment.
        sealed: SealedBidHash,
        /// Options the call carried.
        options: CallOptions,
    },
    /// `unseal_bid` submission.
    UnsealBid {
        /// Label being revealed.
        label_hash: LabelHash,
        /// Claimed bid value in wei.
        value: u128,
        /// Hash of the bid secret.
        secret: SecretHash,
        /// Options the call carried.
        options: CallOptions,
    },
    /// `finalize_auction` submission.
    FinalizeAuction {
        /// Label being finalized.
        label_hash: LabelHash,
        /// Options the call carried.
        options: CallOptions,
    },
}

#[derive(Debug, Default)]
struct StubState {
    owners: HashMap<Node, Address>,
    resolvers: HashMap<Node, Address>,
    address_records: HashMap<Node, Address>,
    name_records: HashMap<Node, String>,
    entries: HashMap<LabelHash, RawAuctionEntry>,
    sealed_bids: HashMap<(Address, SealedBidHash), Address>,
    journal: Vec<SubmittedCall>,
    gas_limit: u64,
    tx_counter: u64,
}

/// In-memory implementation of all collaborator traits.
///
/// Cheap to clone — clones share the same underlying state, so a test
/// can hand handles to the code under test and keep one for assertions.
#[derive(Debug, Clone)]
pub struct StubLedger {
    state: Arc<Mutex<StubState>>,
}

impl StubLedger {
    /// Fresh, empty stub with the default gas limit.
    pub fn new() -> Self {
        let state = StubState {
            gas_limit: DEFAULT_GAS_LIMIT,
            ..StubState::default()
        };
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, StubState> {
        // The mutex can only be poisoned by a panicking test thread.
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Set a node's owner.
    pub fn set_owner(&self, node: Node, owner: Address) {
        self.lock().owners.insert(node, owner);
    }

    /// Set a node's resolver contract address.
    pub fn set_resolver(&self, node: Node, resolver: Address) {
        self.lock().resolvers.insert(node, resolver);
    }

    /// Set a node's forward address record.
    pub fn set_address_record(&self, node: Node, address: Address) {
        self.lock().address_records.insert(node, address);
    }

    /// Set a node's name record (reverse lookup target).
    pub fn set_name_record(&self, node: Node, name: impl Into<String>) {
        self.lock().name_records.insert(node, name.into());
    }

    /// Set a label's raw auction entry.
    pub fn set_entry(&self, label_hash: LabelHash, entry: RawAuctionEntry) {
        self.lock().entries.insert(label_hash, entry);
    }

    /// Record a sealed bid as if `new_bid` had been mined for it.
    pub fn record_sealed_bid(&self, bidder: Address, sealed: SealedBidHash) {
        let deed = pseudo_deed(&sealed);
        self.lock().sealed_bids.insert((bidder, sealed), deed);
    }

    /// Override the stub chain's gas limit.
    pub fn set_gas_limit(&self, limit: u64) {
        self.lock().gas_limit = limit;
    }

    /// Every write call submitted so far, in order.
    pub fn submitted_calls(&self) -> Vec<SubmittedCall> {
        self.lock().journal.clone()
    }

    fn record(&self, call: SubmittedCall) -> TxId {
        let mut state = self.lock();
        state.journal.push(call);
        state.tx_counter += 1;
        let mut seed = [0u8; 32];
        seed[24..].copy_from_slice(&state.tx_counter.to_be_bytes());
        TxId(keccak256(&seed))
    }
}

impl Default for StubLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl NameRegistry for StubLedger {
    fn owner(&self, node: Node) -> Result<Option<Address>, LedgerError> {
        Ok(self.lock().owners.get(&node).copied().filter(|a| !a.is_zero()))
    }

    fn resolver(&self, node: Node) -> Result<Option<Address>, LedgerError> {
        Ok(self
            .lock()
            .resolvers
            .get(&node)
            .copied()
            .filter(|a| !a.is_zero()))
    }
}

impl RecordResolver for StubLedger {
    fn address_record(&self, node: Node) -> Result<Option<Address>, LedgerError> {
        Ok(self
            .lock()
            .address_records
            .get(&node)
            .copied()
            .filter(|a| !a.is_zero()))
    }

    fn name_record(&self, node: Node) -> Result<Option<String>, LedgerError> {
        Ok(self.lock().name_records.get(&node).cloned())
    }
}

impl ChainReader for StubLedger {
    fn gas_limit(&self) -> Result<u64, LedgerError> {
        Ok(self.lock().gas_limit)
    }
}

impl AuctionContract for StubLedger {
    fn entries(&self, label_hash: LabelHash) -> Result<RawAuctionEntry, LedgerError> {
        Ok(self
            .lock()
            .entries
            .get(&label_hash)
            .copied()
            .unwrap_or_else(RawAuctionEntry::empty))
    }

    fn hash_bid(
        &self,
        label_hash: LabelHash,
        bidder: Address,
        amount: u128,
        secret: SecretHash,
    ) -> Result<SealedBidHash, LedgerError> {
        let mut preimage = Vec::with_capacity(32 + 20 + 16 + 32);
        preimage.extend_from_slice(label_hash.as_bytes());
        preimage.extend_from_slice(bidder.as_bytes());
        preimage.extend_from_slice(&amount.to_be_bytes());
        preimage.extend_from_slice(secret.as_bytes());
        Ok(SealedBidHash(keccak256(&preimage)))
    }

    fn sealed_bid(
        &self,
        bidder: Address,
        sealed: SealedBidHash,
    ) -> Result<Option<Address>, LedgerError> {
        Ok(self.lock().sealed_bids.get(&(bidder, sealed)).copied())
    }

    fn start_auctions(
        &self,
        label_hashes: &[LabelHash],
        options: &CallOptions,
    ) -> Result<TxId, LedgerError> {
        Ok(self.record(SubmittedCall::StartAuctions {
            label_hashes: label_hashes.to_vec(),
            options: options.clone(),
        }))
    }

    fn new_bid(&self, sealed: SealedBidHash, options: &CallOptions) -> Result<TxId, LedgerError> {
        // Mirror the mined effect so a subsequent reveal finds the bid.
        if let Some(bidder) = options.sender {
            let deed = pseudo_deed(&sealed);
            self.lock().sealed_bids.insert((bidder, sealed), deed);
        }
        Ok(self.record(SubmittedCall::NewBid {
            sealed,
            options: options.clone(),
        }))
    }

    fn unseal_bid(
        &self,
        label_hash: LabelHash,
        value: u128,
        secret: SecretHash,
        options: &CallOptions,
    ) -> Result<TxId, LedgerError> {
        Ok(self.record(SubmittedCall::UnsealBid {
            label_hash,
            value,
            secret,
            options: options.clone(),
        }))
    }

    fn finalize_auction(
        &self,
        label_hash: LabelHash,
        options: &CallOptions,
    ) -> Result<TxId, LedgerError> {
        Ok(self.record(SubmittedCall::FinalizeAuction {
            label_hash,
            options: options.clone(),
        }))
    }
}

impl AuctionConnector for StubLedger {
    fn connect(&self, _address: Address) -> Result<Arc<dyn AuctionContract>, LedgerError> {
        Ok(Arc::new(self.clone()))
    }
}

/// Deterministic placeholder deed address derived from the sealed hash.
fn pseudo_deed(sealed: &SealedBidHash) -> Address {
    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&sealed.as_bytes()[..20]);
    Address(bytes)
}
