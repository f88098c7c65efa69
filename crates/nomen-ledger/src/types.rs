//! # Shared Call Types
//!
//! Value types that cross the collaborator boundary: the raw auction
//! entry tuple, per-call options, and the submission receipt handle.

use std::fmt;

use nomen_core::Address;
use serde::{Deserialize, Serialize};

/// The raw five-field auction entry as the contract reports it.
///
/// This is the unclassified form — `nomen-registrar` projects it into
/// an `AuctionEntry` with a typed status, an optional deed handle, and
/// an absolute registration timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAuctionEntry {
    /// Lifecycle status code, 0 through 5.
    pub status_code: u8,
    /// Deed contract address; all-zero when no deed exists.
    pub deed: Address,
    /// Registration date in epoch seconds; zero when unregistered.
    pub registration_date: u64,
    /// Value currently locked in the deed, in wei.
    pub deposit: u128,
    /// Highest revealed bid, in wei.
    pub highest_bid: u128,
}

impl RawAuctionEntry {
    /// An empty entry — the contract's response for an untouched label.
    pub fn empty() -> Self {
        Self {
            status_code: 0,
            deed: Address::ZERO,
            registration_date: 0,
            deposit: 0,
            highest_bid: 0,
        }
    }
}

/// Per-call submission options.
///
/// Always constructed fresh for each call — there is no shared default
/// instance anywhere in the workspace, so one call's gas override can
/// never leak into the next.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallOptions {
    /// The sending account. Required for bids and reveals.
    pub sender: Option<Address>,
    /// Gas budget override; operations fill in their default when unset.
    pub gas: Option<u64>,
    /// Value attached to the call, in wei.
    pub value: Option<u128>,
}

impl CallOptions {
    /// Fresh options with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh options with the sending account set.
    pub fn from_sender(sender: Address) -> Self {
        Self {
            sender: Some(sender),
            ..Self::default()
        }
    }

    /// Set the gas budget.
    pub fn with_gas(mut self, gas: u64) -> Self {
        self.gas = Some(gas);
        self
    }

    /// Set the attached value in wei.
    pub fn with_value(mut self, value: u128) -> Self {
        self.value = Some(value);
        self
    }
}

/// Handle to a submitted transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TxId(pub [u8; 32]);

impl TxId {
    /// Render as lowercase hex, no prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
