//! # Auction Lifecycle Status
//!
//! Classification of a label's position in the auction lifecycle. The
//! contract reports a bare status code; [`AuctionStatus`] is the closed,
//! typed form exposed to callers.
//!
//! ## Lifecycle
//!
//! ```text
//! NotYetAvailable ─▶ Open ─▶ Auction ─▶ Reveal ─▶ Owned
//!                                  (Forbidden: never auctionable)
//! ```
//!
//! Transitions are driven by chain time and contract calls, not by this
//! client — the enum only names where a label currently stands.

use serde::{Deserialize, Serialize};

use nomen_ledger::LedgerError;

/// A label's current auction lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuctionStatus {
    /// No auction started; the label is available to start one.
    Open,
    /// Bidding window active; reveals not yet permitted.
    Auction,
    /// Auction finalized; the label has an owner and an escrow deed.
    Owned,
    /// Reserved or ineligible for auction.
    Forbidden,
    /// Bidding closed; reveal window active.
    Reveal,
    /// Under a grace period, not yet auctionable.
    NotYetAvailable,
}

impl AuctionStatus {
    /// Classify a raw contract status code.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnexpectedValue`] for codes outside 0..=5 —
    /// data the contract should never report.
    pub fn from_code(code: u8) -> Result<Self, LedgerError> {
        match code {
            0 => Ok(Self::Open),
            1 => Ok(Self::Auction),
            2 => Ok(Self::Owned),
            3 => Ok(Self::Forbidden),
            4 => Ok(Self::Reveal),
            5 => Ok(Self::NotYetAvailable),
            other => Err(LedgerError::UnexpectedValue {
                field: "status_code",
                value: other.to_string(),
            }),
        }
    }

    /// The contract's code for this status.
    pub fn code(&self) -> u8 {
        match self {
            Self::Open => 0,
            Self::Auction => 1,
            Self::Owned => 2,
            Self::Forbidden => 3,
            Self::Reveal => 4,
            Self::NotYetAvailable => 5,
        }
    }

    /// Whether an auction can be started for a label in this state.
    pub fn is_startable(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// Whether reveals are currently permitted.
    pub fn is_revealable(&self) -> bool {
        matches!(self, Self::Reveal)
    }
}

impl TryFrom<u8> for AuctionStatus {
    type Error = LedgerError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl std::fmt::Display for AuctionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Open => "OPEN",
            Self::Auction => "AUCTION",
            Self::Owned => "OWNED",
            Self::Forbidden => "FORBIDDEN",
            Self::Reveal => "REVEAL",
            Self::NotYetAvailable => "NOT_YET_AVAILABLE",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_classify_in_order() {
        let expected = [
            AuctionStatus::Open,
            AuctionStatus::Auction,
            AuctionStatus::Owned,
            AuctionStatus::Forbidden,
            AuctionStatus::Reveal,
            AuctionStatus::NotYetAvailable,
        ];
        for (code, status) in expected.iter().enumerate() {
            assert_eq!(AuctionStatus::from_code(code as u8).unwrap(), *status);
            assert_eq!(status.code(), code as u8);
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert!(matches!(
            AuctionStatus::from_code(6),
            Err(LedgerError::UnexpectedValue { field: "status_code", .. })
        ));
        assert!(AuctionStatus::try_from(255).is_err());
    }

    #[test]
    fn test_predicates() {
        assert!(AuctionStatus::Open.is_startable());
        assert!(!AuctionStatus::Owned.is_startable());
        assert!(AuctionStatus::Reveal.is_revealable());
        assert!(!AuctionStatus::Auction.is_revealable());
    }

    #[test]
    fn test_display() {
        assert_eq!(AuctionStatus::NotYetAvailable.to_string(), "NOT_YET_AVAILABLE");
        assert_eq!(AuctionStatus::Open.to_string(), "OPEN");
    }
}
