#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based tests for the accrual formula.
//!
//! Invariants tested:
//! - Elapsed days never exceed `horizon - start` and never go negative
//! - Accrual is monotonic in the current day and flat past the horizon
//! - Splitting a window never pays more than settling it in one go
//! - A zero rate or zero amount accrues nothing

use proptest::prelude::*;
use tier_staking::accrual::{accrue, elapsed_days, Denomination};
use tier_staking::{Position, Tier};

fn tier(rate: i128) -> Tier {
    Tier {
        min_amount: 1,
        max_amount: i128::MAX,
        lock_days: 0,
        day_rate_a: rate,
        day_rate_b: 0,
        total_deposited: 0,
    }
}

fn position(amount: i128, start: u64) -> Position {
    Position {
        amount,
        tier_index: 1,
        deposit_start_day: start,
    }
}

proptest! {
    #[test]
    fn prop_elapsed_days_bounded(
        start in 0u64..100_000,
        horizon in 0u64..100_000,
        current in 0u64..100_000,
    ) {
        let days = elapsed_days(start, horizon, current);
        prop_assert!(days <= current.saturating_sub(start));
        prop_assert!(days <= horizon.saturating_sub(start));
    }

    #[test]
    fn prop_accrual_monotonic_and_capped(
        amount in 0i128..1_000_000_000_000_000,
        rate in 0i128..100_000_000,
        start in 0u64..1_000,
        horizon_offset in 0u64..1_000,
        a in 0u64..3_000,
        b in 0u64..3_000,
    ) {
        let horizon = start + horizon_offset;
        let (early, late) = if a <= b { (a, b) } else { (b, a) };
        let p = position(amount, start);
        let t = tier(rate);

        let at_early = accrue(&p, &t, Denomination::A, horizon, early).unwrap();
        let at_late = accrue(&p, &t, Denomination::A, horizon, late).unwrap();
        prop_assert!(at_early <= at_late);

        let at_horizon = accrue(&p, &t, Denomination::A, horizon, horizon).unwrap();
        prop_assert!(at_late <= at_horizon);
        prop_assert!(at_late >= 0);
    }

    #[test]
    fn prop_split_settlement_never_overpays(
        amount in 1i128..1_000_000_000_000_000,
        rate in 1i128..100_000_000,
        first in 0u64..500,
        second in 0u64..500,
    ) {
        let t = tier(rate);
        let end = first + second;
        let whole = accrue(&position(amount, 0), &t, Denomination::A, u64::MAX, end).unwrap();
        let head = accrue(&position(amount, 0), &t, Denomination::A, u64::MAX, first).unwrap();
        let tail = accrue(&position(amount, first), &t, Denomination::A, u64::MAX, end).unwrap();
        prop_assert!(head + tail <= whole);
        // Flooring loses less than one unit per settlement.
        prop_assert!(whole - (head + tail) <= 1);
    }

    #[test]
    fn prop_zero_rate_or_amount_accrues_nothing(
        amount in 0i128..1_000_000_000_000_000,
        rate in 0i128..100_000_000,
        days in 0u64..1_000,
    ) {
        let b = accrue(&position(amount, 0), &tier(rate), Denomination::B, u64::MAX, days).unwrap();
        prop_assert_eq!(b, 0);

        let empty = accrue(&position(0, 0), &tier(rate), Denomination::A, u64::MAX, days).unwrap();
        prop_assert_eq!(empty, 0);
    }
}
