//! Day-granular reward accrual.
//!
//! Rewards are never checkpointed: what a position is owed is recomputed from
//! its amount, the *current* definition of the tier it points at, and the
//! number of whole days since its lock window started, capped at the horizon.
//!
//! ```text
//! effective_day = min(current_day, horizon_day)
//! elapsed_days  = max(0, effective_day - deposit_start_day)
//! reward        = amount * day_rate * elapsed_days / RATE_SCALE   (floored)
//! ```

use soroban_sdk::contracttype;

use crate::{catalog::Tier, position::Position, ContractError};

/// Denominator for every per-tier day rate: a rate of `RATE_SCALE` pays the
/// full principal once per day.
pub const RATE_SCALE: i128 = 1_000_000_000;

/// The two independently-rated reward balances a position accrues.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Denomination {
    A,
    B,
}

/// Rewards owed to a position, one amount per denomination.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Accrued {
    pub reward_a: i128,
    pub reward_b: i128,
}

impl Accrued {
    pub fn is_zero(&self) -> bool {
        self.reward_a == 0 && self.reward_b == 0
    }

    pub fn get(&self, denomination: Denomination) -> i128 {
        match denomination {
            Denomination::A => self.reward_a,
            Denomination::B => self.reward_b,
        }
    }
}

/// Whole days that count towards accrual. Clamped at zero when the start day
/// lies after the effective day.
pub fn elapsed_days(deposit_start_day: u64, horizon_day: u64, current_day: u64) -> u64 {
    current_day
        .min(horizon_day)
        .saturating_sub(deposit_start_day)
}

/// Reward owed in a single denomination.
///
/// # Errors
/// [`ContractError::ArithmeticOverflow`] if `amount * rate * days` does not
/// fit in an `i128`.
pub fn accrue(
    position: &Position,
    tier: &Tier,
    denomination: Denomination,
    horizon_day: u64,
    current_day: u64,
) -> Result<i128, ContractError> {
    let days = elapsed_days(position.deposit_start_day, horizon_day, current_day);
    let rate = tier.day_rate(denomination);
    if days == 0 || rate == 0 || position.amount == 0 {
        return Ok(0);
    }

    position
        .amount
        .checked_mul(rate)
        .and_then(|v| v.checked_mul(i128::from(days)))
        .map(|v| v / RATE_SCALE)
        .ok_or(ContractError::ArithmeticOverflow)
}

/// Rewards owed in both denominations.
pub fn accrued(
    position: &Position,
    tier: &Tier,
    horizon_day: u64,
    current_day: u64,
) -> Result<Accrued, ContractError> {
    Ok(Accrued {
        reward_a: accrue(position, tier, Denomination::A, horizon_day, current_day)?,
        reward_b: accrue(position, tier, Denomination::B, horizon_day, current_day)?,
    })
}
