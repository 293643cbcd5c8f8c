//! # Phase controller
//!
//! The raise phase is a pure function of the stored state, the immutable
//! config and the ledger timestamp. Nothing pushes `Open -> ReadyToFinalize`;
//! every reader recomputes it, so there is no stored phase to fall out of sync.
//!
//! The guards below are used by the entry points in `lib.rs` to decide whether
//! an owner operation may run. They never mutate state.

use crate::types::{FairlaunchConfig, Outcome, Phase, RaiseState};
use crate::Error;

/// Phase of the raise at ledger time `now`.
pub fn current_phase(config: &FairlaunchConfig, state: &RaiseState, now: u64) -> Phase {
    match state.outcome {
        Outcome::Finalized => return Phase::Finalized,
        Outcome::Cancelled => return Phase::Cancelled,
        Outcome::Pending => {}
    }
    if !state.funded {
        return Phase::Created;
    }
    if now < config.window_start {
        return Phase::Funded;
    }
    if state.total_deposited >= config.hard_cap || now >= config.window_end {
        return Phase::ReadyToFinalize;
    }
    Phase::Open
}

/// `true` once deposits can no longer be accepted for any reason.
pub fn has_deposits_finished(config: &FairlaunchConfig, state: &RaiseState, now: u64) -> bool {
    matches!(
        current_phase(config, state, now),
        Phase::ReadyToFinalize | Phase::Finalized | Phase::Cancelled
    )
}

/// `reserve_tokens` is allowed only before funding and before the window.
pub fn check_can_reserve(
    config: &FairlaunchConfig,
    state: &RaiseState,
    now: u64,
) -> Result<(), Error> {
    if state.funded || state.outcome != Outcome::Pending {
        return Err(Error::AlreadyFunded);
    }
    if now >= config.window_start {
        return Err(Error::WindowStarted);
    }
    Ok(())
}

/// Deposits are accepted only while `Open`.
pub fn check_open(config: &FairlaunchConfig, state: &RaiseState, now: u64) -> Result<(), Error> {
    match current_phase(config, state, now) {
        Phase::Open => Ok(()),
        _ => Err(Error::NotOpen),
    }
}

/// `finalize` is allowed once, from `ReadyToFinalize`, with a non-zero raise.
pub fn check_can_finalize(
    config: &FairlaunchConfig,
    state: &RaiseState,
    now: u64,
) -> Result<(), Error> {
    match current_phase(config, state, now) {
        Phase::Finalized => Err(Error::AlreadyFinalized),
        Phase::ReadyToFinalize if state.total_deposited > 0 => Ok(()),
        _ => Err(Error::NotReady),
    }
}

/// `cancel` is allowed from any funded, undecided phase.
pub fn check_can_cancel(
    config: &FairlaunchConfig,
    state: &RaiseState,
    now: u64,
) -> Result<(), Error> {
    match current_phase(config, state, now) {
        Phase::Funded | Phase::Open | Phase::ReadyToFinalize => Ok(()),
        Phase::Created => Err(Error::NotFunded),
        Phase::Finalized => Err(Error::AlreadyFinalized),
        Phase::Cancelled => Err(Error::AlreadyCancelled),
    }
}
