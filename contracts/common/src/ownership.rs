//! # Single-owner access control
//!
//! Stores one owner address in instance storage and provides the guard every
//! owner-only entry point calls. Ownership moves in two steps: the current
//! owner proposes a successor, and the successor accepts. Until acceptance the
//! current owner keeps full control and may cancel the proposal.
//!
//! Callers are expected to have invoked `require_auth()` on the address they
//! pass in; these helpers only compare identities.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::CommonError;

// ── Storage keys ─────────────────────────────────────────────────────────────

const OWNER: Symbol = symbol_short!("OWNER");
const PENDING_OWNER: Symbol = symbol_short!("PEND_OWN");

// ── Owner registry ───────────────────────────────────────────────────────────

/// Record the initial owner. Only callable internally during initialisation.
pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&OWNER, owner);
}

/// Returns the current owner, if one has been recorded.
pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&OWNER)
}

/// Returns the proposed successor, if a transfer is pending.
pub fn get_pending_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&PENDING_OWNER)
}

/// Guard: fails unless `caller` is the recorded owner.
///
/// # Errors
/// - [`CommonError::NotInitialized`]: no owner recorded.
/// - [`CommonError::AccessDenied`]: `caller` is someone else.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), CommonError> {
    let owner = get_owner(env).ok_or(CommonError::NotInitialized)?;
    if *caller != owner {
        return Err(CommonError::AccessDenied);
    }
    Ok(())
}

// ── Two-step transfer ────────────────────────────────────────────────────────

/// Propose `new_owner` as successor. Replaces any earlier proposal.
pub fn propose_owner(env: &Env, caller: &Address, new_owner: &Address) -> Result<(), CommonError> {
    require_owner(env, caller)?;
    env.storage().instance().set(&PENDING_OWNER, new_owner);
    Ok(())
}

/// Complete a pending transfer. `caller` must be the proposed owner.
///
/// Returns the previous owner.
pub fn accept_owner(env: &Env, caller: &Address) -> Result<Address, CommonError> {
    let pending = get_pending_owner(env).ok_or(CommonError::NoPendingTransfer)?;
    if *caller != pending {
        return Err(CommonError::AccessDenied);
    }
    let previous = get_owner(env).ok_or(CommonError::NotInitialized)?;

    env.storage().instance().set(&OWNER, &pending);
    env.storage().instance().remove(&PENDING_OWNER);

    Ok(previous)
}

/// Drop a pending transfer. Returns the address whose proposal was cancelled.
pub fn cancel_owner_transfer(env: &Env, caller: &Address) -> Result<Address, CommonError> {
    require_owner(env, caller)?;
    let pending = get_pending_owner(env).ok_or(CommonError::NoPendingTransfer)?;
    env.storage().instance().remove(&PENDING_OWNER);
    Ok(pending)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
