//! # Ownership
//!
//! Single-owner access control for the raise.
//!
//! ## Storage layout
//!
//! - `DataKey::Owner` → `Address`, the one and only owner (instance tier).
//!
//! ## Guarded operations
//!
//! | Entry point          | Guard            |
//! |----------------------|------------------|
//! | `reserve_tokens`     | [`require_owner`] |
//! | `finalize`           | [`require_owner`] |
//! | `cancel`             | [`require_owner`] |
//! | `recover_tokens`     | [`require_owner`] |
//! | `transfer_ownership` | [`require_owner`] |
//!
//! Every other entry point is self-service: the participant authorises its
//! own call and can only touch its own depositor record.
//!
//! ## Threat model notes
//!
//! - `require_owner` checks both the signature (`require_auth`) and the
//!   identity. A valid signature from any other address is `NotAuthorized`.
//! - Ownership transfer is immediate; the previous owner loses every
//!   privilege in the same invocation.

use soroban_sdk::{Address, Env};

use crate::{events, storage, Error};

/// Record the initial owner. Called once from `init`.
pub fn init_owner(env: &Env, owner: &Address) {
    storage::set_owner(env, owner);
}

/// Returns the current owner, or `None` before `init`.
pub fn owner(env: &Env) -> Option<Address> {
    storage::get_owner(env)
}

/// Assert that `caller` authorised this invocation and is the owner.
/// Panics with `Error::NotAuthorized` otherwise.
pub fn require_owner(env: &Env, caller: &Address) {
    caller.require_auth();
    match storage::get_owner(env) {
        Some(ref o) if o == caller => {}
        Some(_) => soroban_sdk::panic_with_error!(env, Error::NotAuthorized),
        None => soroban_sdk::panic_with_error!(env, Error::NotInitialized),
    }
}

/// Hand the owner role to `new_owner`.
///
/// - `current` must authorise and must be the owner.
/// - Emits an `owner` event.
pub fn transfer_ownership(env: &Env, current: &Address, new_owner: &Address) {
    require_owner(env, current);
    storage::set_owner(env, new_owner);
    events::emit_ownership_transferred(env, current.clone(), new_owner.clone());
}
