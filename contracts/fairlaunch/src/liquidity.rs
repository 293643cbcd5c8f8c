//! # Liquidity bridge
//!
//! One-shot hand-off of the raised quote asset and the liquidity reserve to
//! an external AMM. Called only from `finalize`, after the outcome has been
//! written, so a failure here must abort the enclosing invocation: every
//! sub-call goes through the `try_` client variant and any error is mapped to
//! [`Error::LiquiditySeedFailed`], which the entry point raises as a panic.
//!
//! Sequence:
//!
//! 1. approve the router for `tokens_for_liquidity` of the token and
//!    `total_deposited` of the quote asset (there is no attached value on
//!    Soroban, the router pulls both sides through allowances);
//! 2. `create_pair(token, quote_asset)` on the factory, a no-op for an
//!    existing pair;
//! 3. `add_liquidity_eth` with `min == desired` on both sides; the router
//!    must report that it used exactly those amounts.

use soroban_sdk::{contractclient, token, Address, Env};

use crate::types::{FairlaunchConfig, RaiseState};
use crate::Error;

/// Allowance lifetime granted to the router, in ledgers.
const APPROVAL_LEDGERS: u32 = 100;

/// Deadline handed to the router, in seconds past the current ledger time.
pub const LIQUIDITY_DEADLINE_SECS: u64 = 300;

/// Pair factory of the target AMM.
#[contractclient(name = "AmmFactoryClient")]
pub trait AmmFactoryInterface {
    /// Create the pool for `(token_a, token_b)` or return the existing one.
    fn create_pair(env: Env, token_a: Address, token_b: Address) -> Address;
}

/// Liquidity router of the target AMM.
#[contractclient(name = "AmmRouterClient")]
pub trait AmmRouterInterface {
    /// Pull `amount_token_desired` of `token` and `amount_native_desired` of
    /// the router's native asset from `from`, deposit them into the pool and
    /// mint LP shares to `to`. Returns `(token_used, native_used, liquidity)`.
    fn add_liquidity_eth(
        env: Env,
        from: Address,
        token: Address,
        amount_token_desired: i128,
        amount_token_min: i128,
        amount_native_desired: i128,
        amount_native_min: i128,
        to: Address,
        deadline: u64,
    ) -> (i128, i128, i128);
}

/// Seed the pool and return its address. LP shares go to `lp_recipient`.
pub fn seed_liquidity(
    env: &Env,
    config: &FairlaunchConfig,
    state: &RaiseState,
    lp_recipient: &Address,
) -> Result<Address, Error> {
    let this = env.current_contract_address();
    let token_amount = state.tokens_for_liquidity;
    let native_amount = state.total_deposited;
    let expiration = env.ledger().sequence() + APPROVAL_LEDGERS;

    let token_client = token::Client::new(env, &config.token);
    let native_client = token::Client::new(env, &config.quote_asset);
    let approvals = [
        token_client.try_approve(&this, &config.amm_router, &token_amount, &expiration),
        native_client.try_approve(&this, &config.amm_router, &native_amount, &expiration),
    ];
    if approvals.iter().any(|r| !matches!(r, Ok(Ok(())))) {
        return Err(Error::LiquiditySeedFailed);
    }

    let factory = AmmFactoryClient::new(env, &config.amm_factory);
    let pool = match factory.try_create_pair(&config.token, &config.quote_asset) {
        Ok(Ok(pool)) => pool,
        _ => return Err(Error::LiquiditySeedFailed),
    };

    let router = AmmRouterClient::new(env, &config.amm_router);
    let deadline = env.ledger().timestamp() + LIQUIDITY_DEADLINE_SECS;
    let (token_used, native_used, _liquidity) = match router.try_add_liquidity_eth(
        &this,
        &config.token,
        &token_amount,
        &token_amount,
        &native_amount,
        &native_amount,
        lp_recipient,
        &deadline,
    ) {
        Ok(Ok(used)) => used,
        _ => return Err(Error::LiquiditySeedFailed),
    };
    if token_used != token_amount || native_used != native_amount {
        return Err(Error::LiquiditySeedFailed);
    }

    Ok(pool)
}
