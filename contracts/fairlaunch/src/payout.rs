//! # Claims and refunds
//!
//! Disbursement for both outcomes of the raise. Each participant gets exactly
//! one of: a token claim after finalization, or a quote-asset refund after
//! cancellation.
//!
//! Both paths write the depositor flag and the raise totals *before* the
//! outbound transfer. If the transfer panics, the host discards those writes
//! together with everything else in the invocation.

use soroban_sdk::{token, Address, Env};

use crate::allocation::compute_claim;
use crate::ledger::require_contributor;
use crate::phase::current_phase;
use crate::storage;
use crate::types::{FairlaunchConfig, Phase, RaiseState};
use crate::Error;

/// Pay `claimant` its proportional share of the claim reserve.
/// Returns the amount transferred.
pub fn claim_tokens(
    env: &Env,
    config: &FairlaunchConfig,
    state: &mut RaiseState,
    claimant: &Address,
) -> Result<i128, Error> {
    if current_phase(config, state, env.ledger().timestamp()) != Phase::Finalized {
        return Err(Error::NotFinalized);
    }
    let mut depositor = require_contributor(env, claimant)?;
    if depositor.claimed {
        return Err(Error::AlreadyClaimed);
    }

    let amount = compute_claim(
        env,
        state.tokens_for_claiming,
        depositor.amount,
        state.total_deposited,
    )?;

    depositor.claimed = true;
    state.total_claimed = state
        .total_claimed
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    storage::save_depositor(env, claimant, &depositor);
    storage::save_state(env, state);

    if amount > 0 {
        token::Client::new(env, &config.token).transfer(
            &env.current_contract_address(),
            claimant,
            &amount,
        );
    }
    Ok(amount)
}

/// Return the full contribution of `depositor_address` after cancellation.
/// Returns the amount transferred.
pub fn withdraw_currency(
    env: &Env,
    config: &FairlaunchConfig,
    state: &mut RaiseState,
    depositor_address: &Address,
) -> Result<i128, Error> {
    if current_phase(config, state, env.ledger().timestamp()) != Phase::Cancelled {
        return Err(Error::NotCancelled);
    }
    let mut depositor = require_contributor(env, depositor_address)?;
    if depositor.refunded {
        return Err(Error::AlreadyRefunded);
    }

    let amount = depositor.amount;
    depositor.refunded = true;
    state.total_refunded = state
        .total_refunded
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    storage::save_depositor(env, depositor_address, &depositor);
    storage::save_state(env, state);

    token::Client::new(env, &config.quote_asset).transfer(
        &env.current_contract_address(),
        depositor_address,
        &amount,
    );
    Ok(amount)
}
