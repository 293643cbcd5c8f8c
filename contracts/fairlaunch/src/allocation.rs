//! # Allocation
//!
//! Proportional token share of a contribution:
//!
//! ```text
//! claim = floor(tokens_for_claiming * amount / total_deposited)
//! ```
//!
//! The product is taken in 256 bits so that 18-decimal tokens against
//! 18-decimal caps cannot overflow `i128`. Truncation means the sum of all
//! claims can fall short of `tokens_for_claiming` by at most
//! `claimants - 1` minimal units; that dust stays in the contract.

use soroban_sdk::{Env, U256};

use crate::Error;

pub fn compute_claim(
    env: &Env,
    tokens_for_claiming: i128,
    amount: i128,
    total_deposited: i128,
) -> Result<i128, Error> {
    if tokens_for_claiming < 0 || amount < 0 || amount > total_deposited {
        return Err(Error::InvalidAmount);
    }
    if total_deposited == 0 || amount == 0 || tokens_for_claiming == 0 {
        return Ok(0);
    }

    let product = U256::from_u128(env, tokens_for_claiming as u128)
        .mul(&U256::from_u128(env, amount as u128));
    let share = product.div(&U256::from_u128(env, total_deposited as u128));

    // amount <= total, so share <= tokens_for_claiming and always fits.
    share
        .to_u128()
        .and_then(|v| i128::try_from(v).ok())
        .ok_or(Error::Overflow)
}
