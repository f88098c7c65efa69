//! # nomen-registrar — Commit-Reveal Auction Engine
//!
//! The client side of the sealed-bid auction that allocates single-level
//! labels under one reserved top-level name (`eth`). The chain owns the
//! auction's actual state transitions; this crate classifies lifecycle
//! state, constructs the calls, and enforces every precondition that can
//! be checked before a transaction is irrevocably submitted:
//!
//! - a bid must name its sending account and clear the minimum bid floor;
//! - a reveal must match a previously sealed bid — submitting an
//!   unmatched reveal burns the bid, so the check happens client-side
//!   first;
//! - a batch of auction starts must fit the chain's per-block gas
//!   ceiling, or it could never execute.
//!
//! ## Terminology
//!
//! - **Name**: a fully qualified registry name, like `tickets.eth`.
//! - **Label**: the segment the registrar auctions, like `tickets`.
//!
//! The registrar manages only direct children of its top-level name;
//! deeper names (`fotc.tickets.eth`) are rejected.
//!
//! ## Binding
//!
//! The auction contract's address is discovered from the registry (it
//! owns the `eth` node). [`Registrar`] is a two-state machine:
//! [`Detached`] holds the collaborator handles, and only a successful
//! owner lookup produces a [`Bound`] registrar carrying a live contract
//! handle. Auction operations exist exclusively on the bound state.

pub mod entry;
pub mod gas;
pub mod registrar;
pub mod status;

pub use entry::{AuctionEntry, Deed};
pub use gas::GasSchedule;
pub use registrar::{
    BindingState, Bound, Detached, Registrar, RegistrarError, MIN_BID_WEI, REGISTRAR_TLD,
};
pub use status::AuctionStatus;
