#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

use crate::config::GlobalConfig;

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub config: GlobalConfig,
    pub timestamp: u64,
}

/// Fired when an account deposits into (or re-locks in) a tier.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositEvent {
    pub account: Address,
    pub tier_index: u32,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when an account withdraws principal.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawEvent {
    pub account: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when accrued rewards are settled to an account.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HarvestEvent {
    pub account: Address,
    pub reward_a: i128,
    pub reward_b: i128,
    pub timestamp: u64,
}

/// Fired when the owner appends a tier.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TierAddedEvent {
    pub lock_days: u32,
    pub index: u32,
    pub timestamp: u64,
}

/// Fired when the owner edits a tier in place.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TierUpdatedEvent {
    pub index: u32,
    pub timestamp: u64,
}

/// Fired when the reward horizon moves.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HorizonUpdatedEvent {
    pub day: u64,
    pub timestamp: u64,
}

/// Fired when the deposit cutoff day changes.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositCutoffUpdatedEvent {
    pub day: u64,
    pub timestamp: u64,
}

/// Fired when deposits are switched on or off.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositEnabledUpdatedEvent {
    pub enabled: bool,
    pub timestamp: u64,
}

/// Fired when the rate scales change.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RateScaleUpdatedEvent {
    pub scale_a: i128,
    pub scale_b: i128,
    pub timestamp: u64,
}

/// Fired when the owner force-exits a position.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmergencyWithdrawEvent {
    pub account: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when a stray token balance is swept out of custody.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ForeignTokenSweptEvent {
    pub token: Address,
    pub amount: i128,
    pub to: Address,
    pub timestamp: u64,
}

/// Fired when an ownership transfer is proposed.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerTransferProposedEvent {
    pub current_owner: Address,
    pub proposed_owner: Address,
    pub timestamp: u64,
}

/// Fired when an ownership transfer is accepted.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerTransferAcceptedEvent {
    pub old_owner: Address,
    pub new_owner: Address,
    pub timestamp: u64,
}

/// Fired when a pending ownership transfer is cancelled.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerTransferCancelledEvent {
    pub owner: Address,
    pub cancelled_proposed: Address,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, owner: Address, config: GlobalConfig) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            owner,
            config,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_deposit(env: &Env, account: Address, tier_index: u32, amount: i128) {
    env.events().publish(
        (symbol_short!("DEPOSIT"), account.clone()),
        DepositEvent {
            account,
            tier_index,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_withdraw(env: &Env, account: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("WITHDRAW"), account.clone()),
        WithdrawEvent {
            account,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_harvest(env: &Env, account: Address, reward_a: i128, reward_b: i128) {
    env.events().publish(
        (symbol_short!("HARVEST"), account.clone()),
        HarvestEvent {
            account,
            reward_a,
            reward_b,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_tier_added(env: &Env, lock_days: u32, index: u32) {
    env.events().publish(
        (symbol_short!("TIER_ADD"),),
        TierAddedEvent {
            lock_days,
            index,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_tier_updated(env: &Env, index: u32) {
    env.events().publish(
        (symbol_short!("TIER_UPD"),),
        TierUpdatedEvent {
            index,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_horizon_updated(env: &Env, day: u64) {
    env.events().publish(
        (symbol_short!("HORIZON"),),
        HorizonUpdatedEvent {
            day,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_deposit_cutoff_updated(env: &Env, day: u64) {
    env.events().publish(
        (symbol_short!("CUTOFF"),),
        DepositCutoffUpdatedEvent {
            day,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_deposit_enabled_updated(env: &Env, enabled: bool) {
    env.events().publish(
        (symbol_short!("DEP_ENBL"),),
        DepositEnabledUpdatedEvent {
            enabled,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_rate_scale_updated(env: &Env, scale_a: i128, scale_b: i128) {
    env.events().publish(
        (symbol_short!("RATE_SCL"),),
        RateScaleUpdatedEvent {
            scale_a,
            scale_b,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_emergency_withdraw(env: &Env, account: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("EMRG_WD"), account.clone()),
        EmergencyWithdrawEvent {
            account,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_foreign_token_swept(env: &Env, token: Address, amount: i128, to: Address) {
    env.events().publish(
        (symbol_short!("SWEEP"), token.clone()),
        ForeignTokenSweptEvent {
            token,
            amount,
            to,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_owner_transfer_proposed(env: &Env, current_owner: Address, proposed_owner: Address) {
    env.events().publish(
        (symbol_short!("OWN_PROP"), current_owner.clone()),
        OwnerTransferProposedEvent {
            current_owner,
            proposed_owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_owner_transfer_accepted(env: &Env, old_owner: Address, new_owner: Address) {
    env.events().publish(
        (symbol_short!("OWN_ACPT"), new_owner.clone()),
        OwnerTransferAcceptedEvent {
            old_owner,
            new_owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_owner_transfer_cancelled(env: &Env, owner: Address, cancelled_proposed: Address) {
    env.events().publish(
        (symbol_short!("OWN_CNCL"), owner.clone()),
        OwnerTransferCancelledEvent {
            owner,
            cancelled_proposed,
            timestamp: env.ledger().timestamp(),
        },
    );
}
