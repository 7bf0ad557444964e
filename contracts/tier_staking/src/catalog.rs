//! Tier catalog: an append-only, index-addressed list of reward tiers.
//!
//! Index 0 is the sentinel "no tier" created at initialisation. It has zero
//! bounds, no lock and no rates, cannot be edited, and cannot be chosen by a
//! deposit; positions land there when a withdrawal leaves an amount that no
//! real tier accepts.
//!
//! Positions hold an index, not a copy. Editing a tier re-prices the whole
//! unharvested window of every position that points at it.

use soroban_sdk::{contracttype, symbol_short, Env, Symbol};

use crate::{accrual::Denomination, config::GlobalConfig, ContractError};

pub const SENTINEL_TIER: u32 = 0;

// ── Storage keys ─────────────────────────────────────────────────────────────

const TIER_COUNT: Symbol = symbol_short!("TIER_CNT");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
enum TierKey {
    Tier(u32),
}

const TTL_THRESHOLD: u32 = 5_184_000;
const TTL_EXTEND_TO: u32 = 10_368_000;

// ── Types ────────────────────────────────────────────────────────────────────

/// Owner-supplied definition of a tier.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TierParams {
    pub min_amount: i128,
    pub max_amount: i128,
    pub lock_days: u32,
    /// Parts per [`RATE_SCALE`](crate::accrual::RATE_SCALE) per day.
    pub day_rate_a: i128,
    pub day_rate_b: i128,
}

/// A stored tier: its definition plus the principal currently assigned to it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tier {
    pub min_amount: i128,
    pub max_amount: i128,
    pub lock_days: u32,
    pub day_rate_a: i128,
    pub day_rate_b: i128,
    pub total_deposited: i128,
}

impl Tier {
    pub fn sentinel() -> Self {
        Tier {
            min_amount: 0,
            max_amount: 0,
            lock_days: 0,
            day_rate_a: 0,
            day_rate_b: 0,
            total_deposited: 0,
        }
    }

    fn from_params(params: &TierParams, total_deposited: i128) -> Self {
        Tier {
            min_amount: params.min_amount,
            max_amount: params.max_amount,
            lock_days: params.lock_days,
            day_rate_a: params.day_rate_a,
            day_rate_b: params.day_rate_b,
            total_deposited,
        }
    }

    pub fn day_rate(&self, denomination: Denomination) -> i128 {
        match denomination {
            Denomination::A => self.day_rate_a,
            Denomination::B => self.day_rate_b,
        }
    }

    /// Inclusive bounds test.
    pub fn contains(&self, amount: i128) -> bool {
        self.min_amount <= amount && amount <= self.max_amount
    }

    pub fn check_bounds(&self, amount: i128) -> Result<(), ContractError> {
        if amount < self.min_amount {
            return Err(ContractError::BelowTierMinimum);
        }
        if amount > self.max_amount {
            return Err(ContractError::AboveTierMaximum);
        }
        Ok(())
    }
}

/// Reject definitions the catalog must never hold.
///
/// Bounds must be ordered and start at 1 or more so that an empty position
/// never resolves to a real tier. A nonzero rate below the configured scale
/// for its denomination is too fine to express and is rejected.
pub fn validate(params: &TierParams, config: &GlobalConfig) -> Result<(), ContractError> {
    if params.min_amount < 1 || params.min_amount > params.max_amount {
        return Err(ContractError::InvalidTierBounds);
    }
    for denomination in [Denomination::A, Denomination::B] {
        let rate = match denomination {
            Denomination::A => params.day_rate_a,
            Denomination::B => params.day_rate_b,
        };
        if rate < 0 || (rate != 0 && rate / config.rate_scale(denomination) == 0) {
            return Err(ContractError::InvalidTierRate);
        }
    }
    Ok(())
}

/// First tier, in catalog order, whose bounds contain `amount`.
///
/// Ties go to the lowest index. Entries at the sentinel index are skipped, and
/// a zero amount or an amount no tier accepts resolves to [`SENTINEL_TIER`].
pub fn first_match<I>(tiers: I, amount: i128) -> u32
where
    I: IntoIterator<Item = (u32, Tier)>,
{
    if amount == 0 {
        return SENTINEL_TIER;
    }
    tiers
        .into_iter()
        .find(|(index, tier)| *index != SENTINEL_TIER && tier.contains(amount))
        .map(|(index, _)| index)
        .unwrap_or(SENTINEL_TIER)
}

// ── Storage helpers ──────────────────────────────────────────────────────────

fn store(env: &Env, index: u32, tier: &Tier) {
    let key = TierKey::Tier(index);
    env.storage().persistent().set(&key, tier);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Write the sentinel and start the catalog at one entry.
pub fn init(env: &Env) {
    store(env, SENTINEL_TIER, &Tier::sentinel());
    env.storage().instance().set(&TIER_COUNT, &1u32);
}

/// Number of entries, sentinel included.
pub fn count(env: &Env) -> u32 {
    env.storage().instance().get(&TIER_COUNT).unwrap_or(0)
}

pub fn get(env: &Env, index: u32) -> Option<Tier> {
    let key = TierKey::Tier(index);
    let tier: Option<Tier> = env.storage().persistent().get(&key);
    if tier.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
    tier
}

/// Any existing entry, the sentinel included.
pub fn require(env: &Env, index: u32) -> Result<Tier, ContractError> {
    if index >= count(env) {
        return Err(ContractError::UnknownTier);
    }
    get(env, index).ok_or(ContractError::UnknownTier)
}

/// An entry a deposit may select or the owner may edit: never the sentinel.
pub fn require_real(env: &Env, index: u32) -> Result<Tier, ContractError> {
    if index == SENTINEL_TIER {
        return Err(ContractError::UnknownTier);
    }
    require(env, index)
}

pub fn append(env: &Env, config: &GlobalConfig, params: &TierParams) -> Result<u32, ContractError> {
    validate(params, config)?;
    let index = count(env);
    store(env, index, &Tier::from_params(params, 0));
    let next = index.checked_add(1).ok_or(ContractError::ArithmeticOverflow)?;
    env.storage().instance().set(&TIER_COUNT, &next);
    Ok(index)
}

/// Replace a definition in place. The tier keeps its `total_deposited`.
pub fn overwrite(
    env: &Env,
    config: &GlobalConfig,
    index: u32,
    params: &TierParams,
) -> Result<(), ContractError> {
    let existing = require_real(env, index)?;
    validate(params, config)?;
    store(env, index, &Tier::from_params(params, existing.total_deposited));
    Ok(())
}

/// Resolve the tier a remaining amount falls into after a withdrawal.
pub fn resolve_for_amount(env: &Env, amount: i128) -> u32 {
    let n = count(env);
    first_match(
        (1..n).filter_map(|index| get(env, index).map(|tier| (index, tier))),
        amount,
    )
}

/// True while any tier, the sentinel included, still holds principal.
pub fn has_deposits(env: &Env) -> bool {
    (0..count(env)).any(|index| get(env, index).is_some_and(|tier| tier.total_deposited != 0))
}

/// Reassign a position's principal: `from_amount` leaves `from_index`, then
/// `to_amount` joins `to_index`. The two indices may be equal.
pub fn move_principal(
    env: &Env,
    from_index: u32,
    from_amount: i128,
    to_index: u32,
    to_amount: i128,
) -> Result<(), ContractError> {
    let mut from = require(env, from_index)?;
    from.total_deposited = from
        .total_deposited
        .checked_sub(from_amount)
        .ok_or(ContractError::ArithmeticOverflow)?;
    store(env, from_index, &from);

    let mut to = require(env, to_index)?;
    to.total_deposited = to
        .total_deposited
        .checked_add(to_amount)
        .ok_or(ContractError::ArithmeticOverflow)?;
    store(env, to_index, &to);
    Ok(())
}
