//! # Fairlaunch Contract
//!
//! A capped, time-boxed raise denominated in the network's native asset. The
//! owner commits a fixed token reserve, participants deposit during a public
//! window, and the outcome is one of:
//!
//! - **finalized**: the raised funds and the liquidity reserve seed an AMM
//!   pool in one invocation, and each participant claims
//!   `floor(tokens_for_claiming * contribution / total)` tokens;
//! - **cancelled**: each participant withdraws its contribution in full.
//!
//! | Phase           | Entry Point(s)                                   |
//! |-----------------|--------------------------------------------------|
//! | Bootstrap       | [`Fairlaunch::init`]                             |
//! | Funding         | [`Fairlaunch::reserve_tokens`]                   |
//! | Deposits        | [`Fairlaunch::deposit`]                          |
//! | Outcome         | [`Fairlaunch::finalize`], [`Fairlaunch::cancel`] |
//! | Disbursement    | `claim_tokens`, `withdraw_currency`, `recover_tokens` |
//! | Owner admin     | `transfer_ownership`                             |
//! | Queries         | `get_phase`, `get_state`, `deposit_of`, `current_token_share`, ... |
//!
//! ## Architecture
//!
//! The phase is derived on every read by [`phase`]. Bookkeeping lives in
//! [`ledger`] and [`payout`], pricing in [`allocation`], the AMM hand-off in
//! [`liquidity`], and the owner gate in [`ownership`]. This file holds the
//! entry points and event emissions only.
//!
//! Every invocation is atomic: a panic anywhere, including inside the token or
//! AMM contracts, discards all writes made by that invocation.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, token, Address, Env,
};

pub mod allocation;
pub mod events;
pub mod ledger;
pub mod liquidity;
pub mod ownership;
pub mod payout;
pub mod phase;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod mock_amm;

pub use liquidity::{AmmFactoryClient, AmmRouterClient};
pub use types::{Depositor, FairlaunchConfig, Outcome, Phase, RaiseState};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    InvalidAmount = 4,
    InvalidWindow = 5,
    AlreadyFunded = 6,
    NotFunded = 7,
    WindowStarted = 8,
    InsufficientBalance = 9,
    NotOpen = 10,
    BelowMinimum = 11,
    CapExceeded = 12,
    NotReady = 13,
    AlreadyFinalized = 14,
    AlreadyCancelled = 15,
    NotFinalized = 16,
    NotCancelled = 17,
    NoContribution = 18,
    AlreadyClaimed = 19,
    AlreadyRefunded = 20,
    LiquiditySeedFailed = 21,
    Overflow = 22,
    NothingToRecover = 23,
    InvalidConfig = 24,
}

#[contract]
pub struct Fairlaunch;

#[contractimpl]
impl Fairlaunch {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the raise with its immutable configuration.
    ///
    /// Must be called exactly once immediately after deployment.
    /// Subsequent calls panic with `Error::AlreadyInitialized`.
    ///
    /// - `owner` becomes the only identity allowed to fund, finalize or cancel.
    /// - `window_start < window_end` and `0 < min_deposit <= hard_cap`.
    /// - `token` and `quote_asset` must be distinct contracts.
    pub fn init(env: Env, owner: Address, config: FairlaunchConfig) {
        owner.require_auth();
        if storage::is_initialized(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }
        if config.window_start >= config.window_end {
            panic_with_error!(&env, Error::InvalidWindow);
        }
        if config.min_deposit <= 0 || config.hard_cap < config.min_deposit {
            panic_with_error!(&env, Error::InvalidAmount);
        }
        if config.token == config.quote_asset {
            panic_with_error!(&env, Error::InvalidConfig);
        }

        ownership::init_owner(&env, &owner);
        storage::save_config(&env, &config);
        storage::save_state(&env, &RaiseState::new());

        events::emit_initialized(
            &env,
            owner,
            config.token,
            config.window_start,
            config.window_end,
            config.hard_cap,
        );
    }

    // ─────────────────────────────────────────────────────────
    // Owner operations
    // ─────────────────────────────────────────────────────────

    /// Commit the claim and liquidity reserves. `Created -> Funded`.
    ///
    /// Whatever the contract does not already hold is pulled from `owner`
    /// through an allowance, so the owner may either approve the contract or
    /// transfer the tokens beforehand.
    pub fn reserve_tokens(
        env: Env,
        owner: Address,
        tokens_for_claiming: i128,
        tokens_for_liquidity: i128,
    ) {
        ownership::require_owner(&env, &owner);
        let (config, mut state) = Self::load(&env);

        phase::check_can_reserve(&config, &state, env.ledger().timestamp())
            .unwrap_or_else(|e| panic_with_error!(&env, e));

        if tokens_for_claiming <= 0 || tokens_for_liquidity <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }
        let required = tokens_for_claiming
            .checked_add(tokens_for_liquidity)
            .unwrap_or_else(|| panic_with_error!(&env, Error::Overflow));

        let this = env.current_contract_address();
        let token_client = token::Client::new(&env, &config.token);
        let held = token_client.balance(&this);
        if held < required {
            let shortfall = required - held;
            let pulled = token_client.try_transfer_from(&this, &owner, &this, &shortfall);
            if !matches!(pulled, Ok(Ok(()))) {
                panic_with_error!(&env, Error::InsufficientBalance);
            }
        }
        if token_client.balance(&this) < required {
            panic_with_error!(&env, Error::InsufficientBalance);
        }

        state.funded = true;
        state.tokens_for_claiming = tokens_for_claiming;
        state.tokens_for_liquidity = tokens_for_liquidity;
        storage::save_state(&env, &state);

        events::emit_tokens_reserved(&env, tokens_for_claiming, tokens_for_liquidity);
    }

    /// Seed the AMM pool and open claims. `ReadyToFinalize -> Finalized`.
    ///
    /// The outcome is written before the AMM calls; if seeding fails the whole
    /// invocation is rolled back and can be retried. Returns the pool address.
    pub fn finalize(env: Env, owner: Address) -> Address {
        ownership::require_owner(&env, &owner);
        let (config, mut state) = Self::load(&env);

        phase::check_can_finalize(&config, &state, env.ledger().timestamp())
            .unwrap_or_else(|e| panic_with_error!(&env, e));

        state.outcome = Outcome::Finalized;
        state.liquidity_seeded = true;
        storage::save_state(&env, &state);

        let pool = liquidity::seed_liquidity(&env, &config, &state, &owner)
            .unwrap_or_else(|e| panic_with_error!(&env, e));

        state.pool = Some(pool.clone());
        storage::save_state(&env, &state);

        events::emit_finalized(
            &env,
            pool.clone(),
            state.total_deposited,
            state.tokens_for_liquidity,
        );
        pool
    }

    /// Abandon the raise and open refunds.
    pub fn cancel(env: Env, owner: Address) {
        ownership::require_owner(&env, &owner);
        let (config, mut state) = Self::load(&env);

        phase::check_can_cancel(&config, &state, env.ledger().timestamp())
            .unwrap_or_else(|e| panic_with_error!(&env, e));

        state.outcome = Outcome::Cancelled;
        storage::save_state(&env, &state);

        events::emit_cancelled(&env, owner, state.total_deposited);
    }

    /// Return every token held by the contract to the owner after
    /// cancellation. Returns the amount transferred.
    ///
    /// Contributions still owed to participants are never part of the sweep.
    pub fn recover_tokens(env: Env, owner: Address) -> i128 {
        ownership::require_owner(&env, &owner);
        let (config, mut state) = Self::load(&env);

        if phase::current_phase(&config, &state, env.ledger().timestamp()) != Phase::Cancelled {
            panic_with_error!(&env, Error::NotCancelled);
        }

        let this = env.current_contract_address();
        let token_client = token::Client::new(&env, &config.token);
        let mut amount = token_client.balance(&this);
        if config.token == config.quote_asset {
            amount -= state.total_deposited - state.total_refunded;
        }
        if amount <= 0 {
            panic_with_error!(&env, Error::NothingToRecover);
        }

        state.tokens_for_claiming = 0;
        state.tokens_for_liquidity = 0;
        storage::save_state(&env, &state);

        token_client.transfer(&this, &owner, &amount);

        events::emit_tokens_recovered(&env, owner, amount);
        amount
    }

    /// Transfer the owner role to `new_owner`.
    pub fn transfer_ownership(env: Env, owner: Address, new_owner: Address) {
        ownership::transfer_ownership(&env, &owner, &new_owner);
    }

    // ─────────────────────────────────────────────────────────
    // Participant operations
    // ─────────────────────────────────────────────────────────

    /// Contribute `amount` of the quote asset while the window is open.
    pub fn deposit(env: Env, depositor: Address, amount: i128) {
        depositor.require_auth();
        let (config, mut state) = Self::load(&env);

        phase::check_open(&config, &state, env.ledger().timestamp())
            .unwrap_or_else(|e| panic_with_error!(&env, e));

        let depositor_total = ledger::record_deposit(&env, &config, &mut state, &depositor, amount)
            .unwrap_or_else(|e| panic_with_error!(&env, e));
        storage::save_state(&env, &state);

        token::Client::new(&env, &config.quote_asset).transfer(
            &depositor,
            &env.current_contract_address(),
            &amount,
        );

        events::emit_deposit(&env, depositor, amount, depositor_total, state.total_deposited);
    }

    /// Claim the caller's token allocation after finalization.
    pub fn claim_tokens(env: Env, claimant: Address) -> i128 {
        claimant.require_auth();
        let (config, mut state) = Self::load(&env);

        let amount = payout::claim_tokens(&env, &config, &mut state, &claimant)
            .unwrap_or_else(|e| panic_with_error!(&env, e));

        events::emit_claimed(&env, claimant, amount);
        amount
    }

    /// Withdraw the caller's contribution after cancellation.
    pub fn withdraw_currency(env: Env, depositor: Address) -> i128 {
        depositor.require_auth();
        let (config, mut state) = Self::load(&env);

        let amount = payout::withdraw_currency(&env, &config, &mut state, &depositor)
            .unwrap_or_else(|e| panic_with_error!(&env, e));

        events::emit_refunded(&env, depositor, amount);
        amount
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn get_phase(env: Env) -> Phase {
        let (config, state) = Self::load(&env);
        phase::current_phase(&config, &state, env.ledger().timestamp())
    }

    /// `true` once the cap is reached, the window has elapsed, or the raise
    /// has an outcome.
    pub fn has_deposits_finished(env: Env) -> bool {
        let (config, state) = Self::load(&env);
        phase::has_deposits_finished(&config, &state, env.ledger().timestamp())
    }

    pub fn get_config(env: Env) -> FairlaunchConfig {
        Self::load(&env).0
    }

    pub fn get_state(env: Env) -> RaiseState {
        Self::load(&env).1
    }

    pub fn get_owner(env: Env) -> Address {
        ownership::owner(&env).unwrap_or_else(|| panic_with_error!(&env, Error::NotInitialized))
    }

    pub fn total_deposited(env: Env) -> i128 {
        Self::load(&env).1.total_deposited
    }

    pub fn liquidity_seeded(env: Env) -> bool {
        Self::load(&env).1.liquidity_seeded
    }

    /// Cumulative contribution of `address`, zero if it never deposited.
    pub fn deposit_of(env: Env, address: Address) -> i128 {
        ledger::share_of(&env, &address)
    }

    pub fn get_depositor(env: Env, address: Address) -> Option<Depositor> {
        storage::load_depositor(&env, &address)
    }

    /// Share of the claim reserve `address` would get against the current
    /// total. Moves with every deposit until the window closes.
    pub fn current_token_share(env: Env, address: Address) -> i128 {
        let (_, state) = Self::load(&env);
        allocation::compute_claim(
            &env,
            state.tokens_for_claiming,
            ledger::share_of(&env, &address),
            state.total_deposited,
        )
        .unwrap_or_else(|e| panic_with_error!(&env, e))
    }

    /// Final allocation of `address`. Fails `NotFinalized` before finalization.
    pub fn claimable(env: Env, address: Address) -> i128 {
        let (config, state) = Self::load(&env);
        if phase::current_phase(&config, &state, env.ledger().timestamp()) != Phase::Finalized {
            panic_with_error!(&env, Error::NotFinalized);
        }
        allocation::compute_claim(
            &env,
            state.tokens_for_claiming,
            ledger::share_of(&env, &address),
            state.total_deposited,
        )
        .unwrap_or_else(|e| panic_with_error!(&env, e))
    }

    // ─────────────────────────────────────────────────────────
    // Internal Helpers
    // ─────────────────────────────────────────────────────────

    fn load(env: &Env) -> (FairlaunchConfig, RaiseState) {
        match (storage::load_config(env), storage::load_state(env)) {
            (Some(config), Some(state)) => (config, state),
            _ => panic_with_error!(env, Error::NotInitialized),
        }
    }
}
