//! # Auction Entry Projection
//!
//! The contract reports a label's auction state as five raw fields.
//! [`AuctionEntry`] is the classified projection handed to callers: a
//! typed status, an optional deed handle (zero address means no deed),
//! an absolute registration timestamp (zero means unregistered), and
//! the value fields passed through untouched.

use serde::{Deserialize, Serialize};

use nomen_core::{Address, Timestamp};
use nomen_ledger::{LedgerError, RawAuctionEntry};

use crate::status::AuctionStatus;

/// Handle to the escrow deed holding a label's locked funds.
///
/// The deed contract itself lives on the chain; this is the reference
/// by which callers reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deed {
    /// Address of the deed contract.
    pub address: Address,
}

/// A label's classified auction entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionEntry {
    /// Lifecycle classification of the label.
    pub status: AuctionStatus,
    /// Escrow deed handle; absent until the auction locks funds.
    pub deed: Option<Deed>,
    /// When the label was registered; absent until finalization.
    pub registration_date: Option<Timestamp>,
    /// Value currently locked in the deed, in wei.
    pub deposit: u128,
    /// Highest revealed bid, in wei.
    pub highest_bid: u128,
}

impl AuctionEntry {
    /// Classify a raw contract entry.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnexpectedValue`] when the status code is
    /// outside the known range or the registration date cannot represent
    /// an instant.
    pub fn from_raw(raw: RawAuctionEntry) -> Result<Self, LedgerError> {
        let status = AuctionStatus::from_code(raw.status_code)?;
        let deed = if raw.deed.is_zero() {
            None
        } else {
            Some(Deed { address: raw.deed })
        };
        let registration_date = if raw.registration_date == 0 {
            None
        } else {
            Some(
                Timestamp::from_epoch_seconds(raw.registration_date).ok_or(
                    LedgerError::UnexpectedValue {
                        field: "registration_date",
                        value: raw.registration_date.to_string(),
                    },
                )?,
            )
        };
        Ok(Self {
            status,
            deed,
            registration_date,
            deposit: raw.deposit,
            highest_bid: raw.highest_bid,
        })
    }
}
