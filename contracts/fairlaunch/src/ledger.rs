//! # Deposit ledger
//!
//! Per-participant contribution records and the running total they sum to.
//! The caller is responsible for checking the phase and for moving the
//! quote asset; this module only validates bounds and mutates bookkeeping.

use soroban_sdk::{Address, Env};

use crate::storage;
use crate::types::{Depositor, FairlaunchConfig, RaiseState};
use crate::Error;

/// Apply a deposit of `amount` from `address` to `state` and the depositor
/// record. Returns the depositor's new cumulative contribution.
///
/// `state` is mutated in place but not persisted; the caller saves it.
pub fn record_deposit(
    env: &Env,
    config: &FairlaunchConfig,
    state: &mut RaiseState,
    address: &Address,
    amount: i128,
) -> Result<i128, Error> {
    if amount < config.min_deposit {
        return Err(Error::BelowMinimum);
    }
    let new_total = state
        .total_deposited
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    if new_total > config.hard_cap {
        return Err(Error::CapExceeded);
    }

    let mut depositor = storage::load_depositor(env, address).unwrap_or_default();
    if depositor.amount == 0 {
        state.depositor_count = state
            .depositor_count
            .checked_add(1)
            .ok_or(Error::Overflow)?;
    }
    depositor.amount = depositor
        .amount
        .checked_add(amount)
        .ok_or(Error::Overflow)?;

    state.total_deposited = new_total;
    storage::save_depositor(env, address, &depositor);
    Ok(depositor.amount)
}

/// Cumulative contribution of `address`, zero if unknown.
pub fn share_of(env: &Env, address: &Address) -> i128 {
    storage::load_depositor(env, address)
        .map(|d| d.amount)
        .unwrap_or(0)
}

/// Load a record that must carry a non-zero contribution.
pub fn require_contributor(env: &Env, address: &Address) -> Result<Depositor, Error> {
    match storage::load_depositor(env, address) {
        Some(d) if d.amount > 0 => Ok(d),
        _ => Err(Error::NoContribution),
    }
}
