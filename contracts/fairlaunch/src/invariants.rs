#![allow(dead_code)]

extern crate std;

use crate::types::{Depositor, FairlaunchConfig, Phase, RaiseState};

/// INV-1: The running total equals the sum of every contribution and never
/// exceeds the hard cap.
pub fn assert_conservation(
    config: &FairlaunchConfig,
    state: &RaiseState,
    depositors: &[Depositor],
) {
    let sum: i128 = depositors.iter().map(|d| d.amount).sum();
    assert_eq!(
        state.total_deposited, sum,
        "INV-1 violated: total {} != sum of contributions {}",
        state.total_deposited, sum
    );
    assert!(
        state.total_deposited <= config.hard_cap,
        "INV-1 violated: total {} exceeds hard cap {}",
        state.total_deposited,
        config.hard_cap
    );
}

/// INV-2: Claims never exceed the claim reserve, and the rounding shortfall
/// is at most `claimants - 1` minimal units.
pub fn assert_allocation_bounded(tokens_for_claiming: i128, claims: &[i128]) {
    let paid: i128 = claims.iter().sum();
    assert!(
        paid <= tokens_for_claiming,
        "INV-2 violated: claims {} exceed reserve {}",
        paid,
        tokens_for_claiming
    );
    let claimants = claims.len() as i128;
    if claimants > 0 {
        assert!(
            tokens_for_claiming - paid <= claimants - 1,
            "INV-2 violated: shortfall {} exceeds {} for {} claimants",
            tokens_for_claiming - paid,
            claimants - 1,
            claimants
        );
    }
}

/// INV-3: No record is both claimed and refunded, and neither flag is set on
/// an empty record.
pub fn assert_exclusive(depositor: &Depositor) {
    assert!(
        !(depositor.claimed && depositor.refunded),
        "INV-3 violated: depositor both claimed and refunded"
    );
    if depositor.claimed || depositor.refunded {
        assert!(
            depositor.amount > 0,
            "INV-3 violated: flag set on a record with no contribution"
        );
    }
}

/// INV-4: Phase transitions only move forward:
///   Created -> Funded -> Open -> ReadyToFinalize -> Finalized
///   Funded | Open | ReadyToFinalize -> Cancelled
/// Repeating the same phase is allowed (no transition observed).
pub fn assert_valid_phase_transition(from: Phase, to: Phase) {
    let valid = from == to
        || matches!(
            (from, to),
            (Phase::Created, Phase::Funded)
                | (Phase::Funded, Phase::Open)
                | (Phase::Funded, Phase::ReadyToFinalize)
                | (Phase::Open, Phase::ReadyToFinalize)
                | (Phase::ReadyToFinalize, Phase::Finalized)
                | (Phase::Funded, Phase::Cancelled)
                | (Phase::Open, Phase::Cancelled)
                | (Phase::ReadyToFinalize, Phase::Cancelled)
        );
    assert!(
        valid,
        "INV-4 violated: invalid phase transition from {:?} to {:?}",
        from, to
    );
}

/// INV-5: Deposit invariant: after a deposit of `amount`, the raise total
/// grows by exactly `amount`.
pub fn assert_deposit_invariant(total_before: i128, total_after: i128, amount: i128) {
    assert_eq!(
        total_after,
        total_before + amount,
        "INV-5 violated: deposit invariant broken: {} + {} != {}",
        total_before,
        amount,
        total_after
    );
}

/// INV-6: Terminal flags imply the matching outcome.
pub fn assert_flags_match_outcome(phase: Phase, state: &RaiseState, depositor: &Depositor) {
    if depositor.claimed {
        assert_eq!(phase, Phase::Finalized, "INV-6 violated: claim outside Finalized");
    }
    if depositor.refunded {
        assert_eq!(phase, Phase::Cancelled, "INV-6 violated: refund outside Cancelled");
    }
    if state.liquidity_seeded {
        assert_eq!(phase, Phase::Finalized, "INV-6 violated: seeded outside Finalized");
    }
}
