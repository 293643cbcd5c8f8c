//! # Storage
//!
//! Provides typed helpers over Soroban's two storage tiers used by the
//! fairlaunch contract:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key       | Type               | Description                         |
//! |-----------|--------------------|-------------------------------------|
//! | `Owner`   | `Address`          | The single privileged identity      |
//! | `Config`  | `FairlaunchConfig` | Immutable raise configuration       |
//! | `State`   | `RaiseState`       | Mutable raise totals and outcome    |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                  | Type        | Description                   |
//! |----------------------|-------------|-------------------------------|
//! | `Depositor(address)` | `Depositor` | One record per contributor    |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! Depositor records must outlive the raise: a participant may come back for a
//! claim or refund long after the window closed, so every read bumps the entry.

use soroban_sdk::{contracttype, Address, Env};

use crate::types::{Depositor, FairlaunchConfig, RaiseState};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Owner identity (Instance).
    Owner,
    /// Immutable configuration (Instance).
    Config,
    /// Mutable raise state (Instance).
    State,
    /// Contribution record keyed by participant (Persistent).
    Depositor(Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_owner(env: &Env) -> Option<Address> {
    bump_instance(env);
    env.storage().instance().get(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    bump_instance(env);
}

pub fn save_config(env: &Env, config: &FairlaunchConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

pub fn load_config(env: &Env) -> Option<FairlaunchConfig> {
    bump_instance(env);
    env.storage().instance().get(&DataKey::Config)
}

pub fn save_state(env: &Env, state: &RaiseState) {
    env.storage().instance().set(&DataKey::State, state);
    bump_instance(env);
}

pub fn load_state(env: &Env) -> Option<RaiseState> {
    bump_instance(env);
    env.storage().instance().get(&DataKey::State)
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Load the record for `address`, or `None` if it never deposited.
pub fn load_depositor(env: &Env, address: &Address) -> Option<Depositor> {
    let key = DataKey::Depositor(address.clone());
    let depositor: Option<Depositor> = env.storage().persistent().get(&key);
    if depositor.is_some() {
        bump_persistent(env, &key);
    }
    depositor
}

pub fn save_depositor(env: &Env, address: &Address, depositor: &Depositor) {
    let key = DataKey::Depositor(address.clone());
    env.storage().persistent().set(&key, depositor);
    bump_persistent(env, &key);
}
