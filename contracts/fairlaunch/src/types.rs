//! # Types
//!
//! Shared data structures used across all modules of the fairlaunch contract.
//!
//! ## Config / State split
//!
//! The raise is stored as two instance-storage entries:
//!
//! - [`FairlaunchConfig`]: written once by `init`; never mutated.
//! - [`RaiseState`]: written on funding, every deposit, and every outcome.
//!
//! Per-participant records ([`Depositor`]) live in persistent storage, one
//! entry per address.
//!
//! ## Phase as a derived Finite-State Machine
//!
//! [`Phase`] is never stored. It is computed from the state, the config and
//! the ledger timestamp by [`crate::phase::current_phase`]:
//!
//! ```text
//! Created ──► Funded ──► Open ──► ReadyToFinalize ──► Finalized
//!               │          │             │
//!               └──────────┴─────────────┴──────────► Cancelled
//! ```
//!
//! Only the two outcomes (`Finalized`, `Cancelled`) are persisted, in
//! [`Outcome`].

use soroban_sdk::{contracttype, Address};

/// Lifecycle phase of the raise, as observed at a given timestamp.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum Phase {
    /// Initialised; token reserves not yet committed by the owner.
    Created,
    /// Reserves committed; the deposit window has not opened.
    Funded,
    /// Deposits accepted.
    Open,
    /// Cap reached or window elapsed; awaiting the owner's `finalize`.
    ReadyToFinalize,
    /// Liquidity seeded; claims open.
    Finalized,
    /// Raise abandoned by the owner; refunds open.
    Cancelled,
}

/// Persisted outcome of the raise. `Pending` until the owner decides it.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Pending,
    Finalized,
    Cancelled,
}

/// Immutable raise configuration, written once at `init`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FairlaunchConfig {
    /// Ledger timestamp at which deposits open (inclusive).
    pub window_start: u64,
    /// Ledger timestamp at which deposits close (exclusive).
    pub window_end: u64,
    /// Smallest accepted single deposit, in quote-asset minimal units.
    pub min_deposit: i128,
    /// Ceiling on cumulative deposits, in quote-asset minimal units.
    pub hard_cap: i128,
    /// Token being launched.
    pub token: Address,
    /// Native asset contract the raise is denominated in.
    pub quote_asset: Address,
    /// AMM factory used to create the (token, quote) pair.
    pub amm_factory: Address,
    /// AMM router that receives the liquidity.
    pub amm_router: Address,
}

/// Mutable raise state.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RaiseState {
    /// Set once by `reserve_tokens`.
    pub funded: bool,
    pub tokens_for_claiming: i128,
    pub tokens_for_liquidity: i128,
    /// Sum of every `Depositor::amount`. Never exceeds `hard_cap`.
    pub total_deposited: i128,
    /// Number of distinct addresses that have deposited.
    pub depositor_count: u32,
    /// Tokens paid out through `claim_tokens`.
    pub total_claimed: i128,
    /// Quote asset paid back through `withdraw_currency`.
    pub total_refunded: i128,
    /// Set once, together with `Outcome::Finalized`.
    pub liquidity_seeded: bool,
    pub outcome: Outcome,
    /// Pair returned by the AMM factory during finalization.
    pub pool: Option<Address>,
}

impl RaiseState {
    pub fn new() -> Self {
        Self {
            funded: false,
            tokens_for_claiming: 0,
            tokens_for_liquidity: 0,
            total_deposited: 0,
            depositor_count: 0,
            total_claimed: 0,
            total_refunded: 0,
            liquidity_seeded: false,
            outcome: Outcome::Pending,
            pool: None,
        }
    }
}

/// Per-participant contribution record.
///
/// Created on the first deposit, never removed. `claimed` and `refunded` are
/// mutually exclusive: the raise can only end in one outcome.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Depositor {
    /// Cumulative quote-asset contribution.
    pub amount: i128,
    pub claimed: bool,
    pub refunded: bool,
}
