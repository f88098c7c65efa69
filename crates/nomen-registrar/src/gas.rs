//! # Gas Schedule
//!
//! Default gas budgets for each auction operation, and the linear model
//! for batched auction starts. Callers can override any budget per call
//! through `CallOptions`; these are the values filled in when they
//! don't.

use serde::{Deserialize, Serialize};

/// Default gas budgets for auction operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasSchedule {
    /// Budget for submitting a sealed bid.
    pub bid: u64,
    /// Budget for revealing a sealed bid.
    pub reveal: u64,
    /// Budget for finalizing a closed auction.
    pub finalize: u64,
    /// Fixed cost of a `start_auctions` batch.
    pub start_base: u64,
    /// Marginal cost per name in a `start_auctions` batch.
    pub start_marginal: u64,
}

impl GasSchedule {
    /// The budget for starting a batch of `n` auctions.
    pub fn start_batch(&self, n: usize) -> u64 {
        self.start_base + self.start_marginal * n as u64
    }
}

impl Default for GasSchedule {
    fn default() -> Self {
        Self {
            bid: 500_000,
            reveal: 150_000,
            finalize: 120_000,
            start_base: 25_000,
            start_marginal: 39_000,
        }
    }
}
