//! Per-account position record.
//!
//! A position is written on the account's first deposit and never removed;
//! leaving the ledger zeroes it back into the sentinel tier.

use soroban_sdk::{contracttype, Address, Env};

use crate::catalog::{Tier, SENTINEL_TIER};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
enum PositionKey {
    Position(Address),
}

const TTL_THRESHOLD: u32 = 5_184_000;
const TTL_EXTEND_TO: u32 = 10_368_000;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Position {
    /// Principal held for the account.
    pub amount: i128,
    /// Catalog index the position currently points at.
    pub tier_index: u32,
    /// Day the current lock window (and accrual window) began.
    pub deposit_start_day: u64,
}

impl Position {
    /// An empty position whose window starts on `day`.
    pub fn empty(day: u64) -> Self {
        Position {
            amount: 0,
            tier_index: SENTINEL_TIER,
            deposit_start_day: day,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.amount == 0
    }

    /// First day principal may leave without the lock. Locks stop holding
    /// once the reward horizon is reached.
    pub fn lock_release_day(&self, tier: &Tier, horizon_day: u64) -> u64 {
        self.deposit_start_day
            .saturating_add(u64::from(tier.lock_days))
            .min(horizon_day)
    }

    pub fn is_locked(&self, tier: &Tier, horizon_day: u64, current_day: u64) -> bool {
        current_day < self.lock_release_day(tier, horizon_day)
    }
}

/// The stored position, or an empty one for accounts that never deposited.
pub fn load(env: &Env, account: &Address) -> Position {
    let key = PositionKey::Position(account.clone());
    match env.storage().persistent().get::<_, Position>(&key) {
        Some(position) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
            position
        }
        None => Position::empty(0),
    }
}

pub fn store(env: &Env, account: &Address, position: &Position) {
    let key = PositionKey::Position(account.clone());
    env.storage().persistent().set(&key, position);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}
